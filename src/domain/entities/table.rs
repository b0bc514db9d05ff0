#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

impl Alignment {
    pub fn css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
        }
    }
}

/// Declarative column: how to render one field and whether search sees it.
pub struct Column<R> {
    pub key: &'static str,
    pub header: &'static str,
    pub cell: fn(&R) -> String,
    pub searchable: bool,
    pub align: Alignment,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

impl<R> Column<R> {
    pub fn text(key: &'static str, header: &'static str, cell: fn(&R) -> String) -> Self {
        Self {
            key,
            header,
            cell,
            searchable: true,
            align: Alignment::Left,
        }
    }

    pub fn numeric(key: &'static str, header: &'static str, cell: fn(&R) -> String) -> Self {
        Self {
            key,
            header,
            cell,
            searchable: false,
            align: Alignment::Right,
        }
    }

    pub fn not_searchable(mut self) -> Self {
        self.searchable = false;
        self
    }
}

pub struct TableSpec<R> {
    pub columns: Vec<Column<R>>,
}

impl<R> Clone for TableSpec<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<R> TableSpec<R> {
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self { columns }
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.key).collect()
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| column.header.to_string())
            .collect()
    }

    pub fn alignments(&self) -> Vec<Alignment> {
        self.columns.iter().map(|column| column.align).collect()
    }

    pub fn cells(&self, record: &R) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| (column.cell)(record))
            .collect()
    }

    pub fn search_fields<'a>(&'a self, record: &'a R) -> impl Iterator<Item = String> + 'a {
        self.columns
            .iter()
            .filter(|column| column.searchable)
            .map(move |column| (column.cell)(record))
    }
}
