//! Lookups over an already-fetched outlet list.

use super::types::Outlet;

/// The outlet with the given id, if the upstream returned one.
pub fn find_by_id(outlets: &[Outlet], id: i64) -> Option<&Outlet> {
    outlets.iter().find(|o| o.id == id)
}

/// Outlets whose name contains `fragment`, ignoring case.
pub fn search_by_name<'a>(outlets: &'a [Outlet], fragment: &str) -> Vec<&'a Outlet> {
    let needle = fragment.trim().to_lowercase();
    outlets
        .iter()
        .filter(|o| o.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: i64, name: &str) -> Outlet {
        Outlet {
            id,
            name: name.into(),
            address: String::new(),
            latitude: None,
            longitude: None,
            operating_hours: String::new(),
            waze_link: String::new(),
        }
    }

    #[test]
    fn test_find_by_id() {
        let outlets = vec![named(1, "Subway Mid Valley"), named(2, "Subway Pavilion")];
        assert_eq!(find_by_id(&outlets, 2).unwrap().name, "Subway Pavilion");
        assert!(find_by_id(&outlets, 3).is_none());
    }

    #[test]
    fn test_search_case_insensitive() {
        let outlets = vec![
            named(1, "Subway Mid Valley"),
            named(2, "Subway Pavilion"),
            named(3, "SUBWAY VALLEY POINT"),
        ];
        let hits: Vec<i64> = search_by_name(&outlets, "valley").iter().map(|o| o.id).collect();
        assert_eq!(hits, vec![1, 3]);
        assert!(search_by_name(&outlets, "sunway").is_empty());
    }
}
