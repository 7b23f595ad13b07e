//! Column inference: map arbitrary spreadsheet headers onto semantic roles.

use super::ingest_errors::IngestError;

/// The four semantic roles a spreadsheet column can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnRole {
    Name,
    Amount,
    Factor,
    Date,
}

/// Accepted header spellings per role, matched against the lower-cased,
/// trimmed header text. Extending recognition means extending these lists,
/// not touching the matching code.
pub const COLUMN_ALIASES: &[(ColumnRole, &[&str])] = &[
    (
        ColumnRole::Name,
        &[
            "nombre",
            "name",
            "nombre_dato",
            "descripcion",
            "desc",
            "dato",
            "item",
        ],
    ),
    (
        ColumnRole::Amount,
        &[
            "monto", "amount", "valor", "value", "precio", "price", "importe",
        ],
    ),
    (
        ColumnRole::Factor,
        &[
            "factor",
            "factor_",
            "multiplicador",
            "multiplier",
            "ratio",
            "coeficiente",
        ],
    ),
    (
        ColumnRole::Date,
        &["fecha", "date", "fecha_dato", "fecha_creacion", "created_at"],
    ),
];

fn role_for(header: &str) -> Option<ColumnRole> {
    COLUMN_ALIASES
        .iter()
        .find(|(_, aliases)| aliases.contains(&header))
        .map(|(role, _)| *role)
}

/// Resolved column positions for one uploaded file.
///
/// The name column is mandatory; the other three are optional. The first
/// column matching a role wins, later duplicates are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: usize,
    pub amount: Option<usize>,
    pub factor: Option<usize>,
    pub date: Option<usize>,
}

impl ColumnMap {
    /// Classifies the header row. Fails when no name-like column resolves.
    pub fn detect(headers: &[String]) -> std::result::Result<Self, IngestError> {
        let mut name = None;
        let mut amount = None;
        let mut factor = None;
        let mut date = None;

        for (index, header) in headers.iter().enumerate() {
            let normalized = header.trim().to_lowercase();
            let slot = match role_for(&normalized) {
                Some(ColumnRole::Name) => &mut name,
                Some(ColumnRole::Amount) => &mut amount,
                Some(ColumnRole::Factor) => &mut factor,
                Some(ColumnRole::Date) => &mut date,
                None => continue,
            };
            if slot.is_none() {
                *slot = Some(index);
            }
        }

        match name {
            Some(name) => Ok(Self {
                name,
                amount,
                factor,
                date,
            }),
            None => Err(IngestError::MissingNameColumn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn detects_spanish_headers() {
        let map = ColumnMap::detect(&headers(&["Nombre", "Monto", "Factor", "Fecha"])).unwrap();
        assert_eq!(map.name, 0);
        assert_eq!(map.amount, Some(1));
        assert_eq!(map.factor, Some(2));
        assert_eq!(map.date, Some(3));
    }

    #[test]
    fn detects_english_headers_case_insensitive() {
        let map = ColumnMap::detect(&headers(&["  VALUE ", "NAME", "created_at"])).unwrap();
        assert_eq!(map.name, 1);
        assert_eq!(map.amount, Some(0));
        assert_eq!(map.factor, None);
        assert_eq!(map.date, Some(2));
    }

    #[test]
    fn first_match_wins_per_role() {
        let map = ColumnMap::detect(&headers(&["nombre", "name", "monto", "valor"])).unwrap();
        assert_eq!(map.name, 0);
        assert_eq!(map.amount, Some(2));
    }

    #[test]
    fn unknown_headers_are_ignored() {
        let map = ColumnMap::detect(&headers(&["codigo", "item", "total"])).unwrap();
        assert_eq!(map.name, 1);
        assert_eq!(map.amount, None);
    }

    #[test]
    fn missing_name_column_is_fatal() {
        let err = ColumnMap::detect(&headers(&["monto", "factor", "fecha"])).unwrap_err();
        assert!(matches!(err, IngestError::MissingNameColumn));
    }
}
