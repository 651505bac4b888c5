//! Access sections granted to users.

/// Names of access sections stored in `users.sections`.
pub struct Section;

impl Section {
    pub const FULL_ALL_ACCESS: &'static str = "full_all_access";
    pub const FULL_COMPANY_ACCESS: &'static str = "full_company_access";
    pub const FULL_ACCESS: &'static str = "full_access";
    pub const ORDER_CARD_ACCESS: &'static str = "order_card_access";
    pub const PRODUCTION_DATA_ACCESS: &'static str = "production_data_access";
    pub const STATUS_AND_CALCULATE_ACCESS: &'static str = "status_and_calculate_access";
    pub const PURCHASE_PLANNING_ACCESS: &'static str = "purchase_planning_access";

    /// Sections that make a user responsible for purchasing.
    pub const PURCHASE_RESPONSIBLE: [&'static str; 3] = [
        Self::FULL_COMPANY_ACCESS,
        Self::FULL_ACCESS,
        Self::PURCHASE_PLANNING_ACCESS,
    ];
}
