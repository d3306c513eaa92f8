/// Cost center service interface
pub mod cost_center;
/// Invoice service interface
pub mod invoice;
/// Ledger service interface
pub mod ledger;
/// Mutation service interface
pub mod mutation;
/// Relation service interface
pub mod relation;
