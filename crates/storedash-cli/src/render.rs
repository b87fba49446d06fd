use storedash_core::StoreRecord;

/// Renders the store collection as a fixed-width table, one row per store.
pub(crate) fn render_store_table(stores: &[StoreRecord]) -> String {
    if stores.is_empty() {
        return "no stores provisioned; run `storedash create` to provision one".to_string();
    }

    let mut lines = vec![format!("{:<24}{:<24}URL", "STORE ID", "STATUS")];
    for store in stores {
        lines.push(format!(
            "{:<24}{:<24}{}",
            store.store_id, store.status, store.url
        ));
    }
    lines.join("\n")
}

/// Renders the audit event list, newest last, as reported by the service.
pub(crate) fn render_audit(events: &[String]) -> String {
    if events.is_empty() {
        return "no audit events recorded".to_string();
    }
    events.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, status: &str) -> StoreRecord {
        StoreRecord {
            store_id: id.to_string(),
            status: status.to_string(),
            url: format!("http://{id}.localhost"),
        }
    }

    #[test]
    fn renders_one_row_per_store_plus_header() {
        let stores = vec![
            record("store-a1b2c3", "Ready"),
            record("store-d4e5f6", "Provisioning"),
            record("store-778899", "Provisioning (timeout)"),
        ];
        let table = render_store_table(&stores);

        assert_eq!(table.lines().count(), 4);
        let header = table.lines().next().expect("header row");
        assert!(header.starts_with("STORE ID"));
        assert!(header.contains("STATUS"));
        assert!(header.contains("URL"));
    }

    #[test]
    fn row_shows_id_status_and_url() {
        let table = render_store_table(&[record("s1", "running")]);
        let row = table.lines().nth(1).expect("data row");

        assert!(row.starts_with("s1"));
        assert!(row.contains("running"));
        assert!(row.contains("http://s1.localhost"));
    }

    #[test]
    fn empty_collection_renders_hint_instead_of_table() {
        let table = render_store_table(&[]);
        assert!(table.contains("no stores provisioned"));
        assert!(!table.contains("STORE ID"));
    }

    #[test]
    fn audit_lists_events_in_order() {
        let events = vec![
            "Created store-a1b2c3".to_string(),
            "Deleted store-a1b2c3".to_string(),
        ];
        let rendered = render_audit(&events);
        assert_eq!(rendered, "Created store-a1b2c3\nDeleted store-a1b2c3");
    }

    #[test]
    fn audit_empty_state() {
        assert_eq!(render_audit(&[]), "no audit events recorded");
    }
}
