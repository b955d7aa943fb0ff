use resmap::ResolutionMap;

use crate::reports::ListReport;

/// Collect the sorted specifier table.
pub fn list(map: &ResolutionMap) -> ListReport {
    ListReport {
        entries: map
            .sorted_entries()
            .into_iter()
            .map(|(specifier, module)| (specifier.to_string(), module.to_string()))
            .collect(),
    }
}
