/// Strip the module path from a fully qualified type name.
///
/// `"tienda_pipeline::components::search_filter::SearchFilter"` becomes
/// `"SearchFilter"`; used for stage names in logs.
pub(crate) fn short_type_name(full: &str) -> &str {
    full.rsplit("::").next().unwrap_or(full)
}
