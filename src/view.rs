//! Client-side inventory state: the fetched record list plus two filter
//! fragments, with the visible subset derived by re-running the filter on
//! every change rather than maintained incrementally.

use chrono::{DateTime, Utc};

use crate::{
    error::AppResult,
    filter::{filter_equipment, EquipmentFilter},
    models::Equipment,
};

/// Mutable list-plus-filter state. One fragment comes from translated
/// search queries, the other from panel controls; the panel fragment wins
/// per-key when both set the same field.
#[derive(Debug, Default)]
pub struct InventoryView {
    records: Vec<Equipment>,
    search_filter: EquipmentFilter,
    panel_filter: EquipmentFilter,
}

impl InventoryView {
    pub fn new(records: Vec<Equipment>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    pub fn records(&self) -> &[Equipment] {
        &self.records
    }

    /// Replace the record list (e.g. after a reload or a mutation).
    pub fn set_records(&mut self, records: Vec<Equipment>) {
        self.records = records;
    }

    pub fn set_panel_filter(&mut self, filter: EquipmentFilter) {
        self.panel_filter = filter;
    }

    /// Clear the search fragment (an empty query was submitted).
    pub fn clear_search_filter(&mut self) {
        self.search_filter = EquipmentFilter::default();
    }

    /// Feed the outcome of a search translation into the view. A new search
    /// always resets the panel fragment; on failure the previous search
    /// fragment is left untouched and the error is passed back to the
    /// caller to surface.
    pub fn apply_search(&mut self, outcome: AppResult<EquipmentFilter>) -> AppResult<()> {
        self.panel_filter = EquipmentFilter::default();
        let fragment = outcome?;
        self.search_filter = fragment;
        Ok(())
    }

    /// The merged filter: panel fragment overlaid on the search fragment.
    pub fn effective_filter(&self) -> EquipmentFilter {
        self.search_filter.overlay(&self.panel_filter)
    }

    /// Records matching the merged filter, in stored order.
    pub fn visible(&self, now: DateTime<Utc>) -> Vec<&Equipment> {
        let filter = self.effective_filter();
        filter_equipment(&self.records, &filter, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn record(name: &str, status: &str) -> Equipment {
        Equipment {
            equipment_name: name.to_string(),
            equipment_status: status.to_string(),
            manufacturer_name: Some("Acme".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn panel_fragment_overrides_search_fragment_per_key() {
        let mut view = InventoryView::new(vec![
            record("drill", "active"),
            record("lathe", "retired"),
        ]);

        view.apply_search(Ok(EquipmentFilter {
            status: Some(vec!["retired".to_string()]),
            manufacturer: Some(vec!["Acme".to_string()]),
            ..Default::default()
        }))
        .unwrap();
        view.set_panel_filter(EquipmentFilter {
            status: Some(vec!["active".to_string()]),
            ..Default::default()
        });

        let effective = view.effective_filter();
        assert_eq!(effective.status, Some(vec!["active".to_string()]));
        assert_eq!(effective.manufacturer, Some(vec!["Acme".to_string()]));

        let visible = view.visible(Utc::now());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].equipment_name, "drill");
    }

    #[test]
    fn failed_translation_keeps_previous_search_filter() {
        let mut view = InventoryView::new(vec![record("drill", "active")]);
        view.apply_search(Ok(EquipmentFilter {
            search_text: Some("drill".to_string()),
            ..Default::default()
        }))
        .unwrap();

        let err = view
            .apply_search(Err(AppError::Translation("upstream unavailable".into())))
            .unwrap_err();
        assert!(matches!(err, AppError::Translation(_)));
        assert_eq!(
            view.effective_filter().search_text,
            Some("drill".to_string())
        );
    }

    #[test]
    fn new_search_resets_panel_filter() {
        let mut view = InventoryView::new(vec![
            record("drill", "active"),
            record("lathe", "retired"),
        ]);
        view.set_panel_filter(EquipmentFilter {
            status: Some(vec!["retired".to_string()]),
            ..Default::default()
        });

        view.apply_search(Ok(EquipmentFilter::default())).unwrap();
        assert!(view.effective_filter().is_empty());
        assert_eq!(view.visible(Utc::now()).len(), 2);
    }

    #[test]
    fn clearing_search_keeps_panel_filter() {
        let mut view = InventoryView::new(vec![
            record("drill", "active"),
            record("lathe", "retired"),
        ]);
        view.apply_search(Ok(EquipmentFilter {
            search_text: Some("lathe".to_string()),
            ..Default::default()
        }))
        .unwrap();
        view.set_panel_filter(EquipmentFilter {
            status: Some(vec!["active".to_string()]),
            ..Default::default()
        });

        view.clear_search_filter();
        let visible = view.visible(Utc::now());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].equipment_name, "drill");
    }
}
