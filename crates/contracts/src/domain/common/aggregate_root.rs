/// Aggregate root trait
///
/// Class-level metadata used for table names and reference codes.
pub trait AggregateRoot {
    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name for the database (e.g. "design")
    fn collection_name() -> &'static str;

    /// Prefix of the reference codes allocated for this aggregate
    fn id_prefix() -> &'static str;

    /// Full system name of the aggregate (e.g. "a001_design"), also the table name
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_design::aggregate::Design;
    use crate::domain::a002_booking::aggregate::Booking;

    #[test]
    fn test_full_name_is_table_name() {
        assert_eq!(Design::full_name(), "a001_design");
        assert_eq!(Booking::full_name(), "a002_booking");
        assert_eq!(Booking::id_prefix(), "BK");
    }
}
