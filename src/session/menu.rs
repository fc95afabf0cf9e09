//! Menu choices for the three menu levels
//!
//! Each menu maps the number typed by the operator onto an enum through
//! `TryFrom<u32>`; numbers outside the menu become `InvalidMenuChoice`.

use crate::types::BankError;

/// Whether a menu loop keeps going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Leave,
}

/// Top-level menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    CreateAccount,
    CustomerLogin,
    AdminLogin,
    Exit,
}

impl MainChoice {
    pub const TITLE: &'static str = "===== BANKING SYSTEM =====";

    pub const ITEMS: &'static [&'static str] =
        &["Create Account", "Customer Login", "Admin Login", "Exit"];
}

impl TryFrom<u32> for MainChoice {
    type Error = BankError;

    fn try_from(choice: u32) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(MainChoice::CreateAccount),
            2 => Ok(MainChoice::CustomerLogin),
            3 => Ok(MainChoice::AdminLogin),
            4 => Ok(MainChoice::Exit),
            _ => Err(BankError::invalid_menu_choice(choice)),
        }
    }
}

/// Customer session menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerChoice {
    Deposit,
    Withdraw,
    BalanceEnquiry,
    Transfer,
    History,
    InterestEstimate,
    ChangePin,
    Logout,
}

impl CustomerChoice {
    pub const TITLE: &'static str = "--- CUSTOMER MENU ---";

    pub const ITEMS: &'static [&'static str] = &[
        "Deposit",
        "Withdraw",
        "Balance Enquiry",
        "Transfer Money",
        "Transaction History",
        "Interest Calculation",
        "Change PIN",
        "Logout",
    ];
}

impl TryFrom<u32> for CustomerChoice {
    type Error = BankError;

    fn try_from(choice: u32) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(CustomerChoice::Deposit),
            2 => Ok(CustomerChoice::Withdraw),
            3 => Ok(CustomerChoice::BalanceEnquiry),
            4 => Ok(CustomerChoice::Transfer),
            5 => Ok(CustomerChoice::History),
            6 => Ok(CustomerChoice::InterestEstimate),
            7 => Ok(CustomerChoice::ChangePin),
            8 => Ok(CustomerChoice::Logout),
            _ => Err(BankError::invalid_menu_choice(choice)),
        }
    }
}

/// Admin panel menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminChoice {
    ListAll,
    Search,
    Block,
    Unblock,
    Delete,
    Exit,
}

impl AdminChoice {
    pub const TITLE: &'static str = "--- ADMIN PANEL ---";

    pub const ITEMS: &'static [&'static str] = &[
        "View All Accounts",
        "Search Account",
        "Block Account",
        "Unblock Account",
        "Delete Account",
        "Exit Admin",
    ];
}

impl TryFrom<u32> for AdminChoice {
    type Error = BankError;

    fn try_from(choice: u32) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(AdminChoice::ListAll),
            2 => Ok(AdminChoice::Search),
            3 => Ok(AdminChoice::Block),
            4 => Ok(AdminChoice::Unblock),
            5 => Ok(AdminChoice::Delete),
            6 => Ok(AdminChoice::Exit),
            _ => Err(BankError::invalid_menu_choice(choice)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, MainChoice::CreateAccount)]
    #[case(2, MainChoice::CustomerLogin)]
    #[case(3, MainChoice::AdminLogin)]
    #[case(4, MainChoice::Exit)]
    fn test_main_choices(#[case] number: u32, #[case] expected: MainChoice) {
        assert_eq!(MainChoice::try_from(number).unwrap(), expected);
    }

    #[rstest]
    #[case(1, CustomerChoice::Deposit)]
    #[case(4, CustomerChoice::Transfer)]
    #[case(6, CustomerChoice::InterestEstimate)]
    #[case(8, CustomerChoice::Logout)]
    fn test_customer_choices(#[case] number: u32, #[case] expected: CustomerChoice) {
        assert_eq!(CustomerChoice::try_from(number).unwrap(), expected);
    }

    #[rstest]
    #[case(1, AdminChoice::ListAll)]
    #[case(3, AdminChoice::Block)]
    #[case(5, AdminChoice::Delete)]
    #[case(6, AdminChoice::Exit)]
    fn test_admin_choices(#[case] number: u32, #[case] expected: AdminChoice) {
        assert_eq!(AdminChoice::try_from(number).unwrap(), expected);
    }

    #[rstest]
    #[case::zero(0)]
    #[case::just_past_main(5)]
    #[case::large(u32::MAX)]
    fn test_out_of_range_main_choice(#[case] number: u32) {
        assert_eq!(
            MainChoice::try_from(number).unwrap_err(),
            BankError::InvalidMenuChoice { choice: number }
        );
    }

    #[test]
    fn test_out_of_range_sub_menu_choices() {
        assert!(CustomerChoice::try_from(9).is_err());
        assert!(AdminChoice::try_from(7).is_err());
        assert!(CustomerChoice::try_from(0).is_err());
        assert!(AdminChoice::try_from(0).is_err());
    }

    #[test]
    fn test_item_counts_match_choices() {
        assert_eq!(MainChoice::ITEMS.len(), 4);
        assert_eq!(CustomerChoice::ITEMS.len(), 8);
        assert_eq!(AdminChoice::ITEMS.len(), 6);
    }
}
