//! # Form Validation
//!
//! Pure predicates behind every "submit enabled" flag in the UI, plus the tiny state machine the
//! simulated submissions walk through. Nothing here talks to a server: submissions wait for a
//! fixed delay and then succeed.
//!
//! Text lengths are counted in Unicode scalar values, so `"çãoçãoçã"` has 8 characters.

use crate::money::Cents;

/// Smallest PIX sale accepted, in cents (R$ 5,00).
pub const SALE_MIN_CENTS: Cents = 500;

/// Largest PIX sale accepted, in cents (R$ 500,00).
pub const SALE_MAX_CENTS: Cents = 50_000;

/// Flat fee charged on every withdrawal (R$ 5,00).
pub const WITHDRAWAL_FEE_CENTS: Cents = 500;

/// Minimum password length for login and registration.
pub const PASSWORD_MIN_CHARS: usize = 8;

pub const LOGIN_DELAY_MS: u32 = 1500;
pub const REGISTER_DELAY_MS: u32 = 1500;
pub const WITHDRAWAL_DELAY_MS: u32 = 2000;
pub const KYC_DELAY_MS: u32 = 2000;

pub const PASSWORD_TOO_SHORT: &str = "A senha precisa ter pelo menos 8 caracteres";
pub const PASSWORDS_DIFFER: &str = "As senhas não coincidem";

// ============================================================================
// SUBMISSION STATE
// ============================================================================

/// Lifecycle of a simulated submission: idle → submitting → success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl SubmitState {
    /// Start submitting. Returns `false` (and stays put) unless idle.
    pub fn begin(&mut self) -> bool {
        if *self == SubmitState::Idle {
            *self = SubmitState::Submitting;
            true
        } else {
            false
        }
    }

    /// Mark the in-flight submission as done.
    pub fn finish(&mut self) {
        if *self == SubmitState::Submitting {
            *self = SubmitState::Success;
        }
    }

    /// Dismiss the success display.
    pub fn reset(&mut self) {
        *self = SubmitState::Idle;
    }

    pub fn is_submitting(&self) -> bool {
        *self == SubmitState::Submitting
    }

    pub fn is_success(&self) -> bool {
        *self == SubmitState::Success
    }
}

// ============================================================================
// SALE / WITHDRAWAL
// ============================================================================

/// A PIX sale is allowed between R$ 5,00 and R$ 500,00 inclusive.
pub fn sale_amount_valid(cents: Cents) -> bool {
    (SALE_MIN_CENTS..=SALE_MAX_CENTS).contains(&cents)
}

/// Everything the withdrawal screen derives from the requested amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalQuote {
    pub amount: Cents,
    pub fee: Cents,
    /// Largest amount that can be requested: available balance minus the fee.
    pub max_payable: Cents,
    /// What reaches the user's account, never negative.
    pub net: Cents,
    pub valid: bool,
}

impl WithdrawalQuote {
    pub fn new(amount: Cents, available: Cents, fee: Cents) -> Self {
        let max_payable = available.saturating_sub(fee).max(0);
        Self {
            amount,
            fee,
            max_payable,
            net: amount.saturating_sub(fee).max(0),
            valid: amount > fee && amount <= max_payable,
        }
    }
}

// ============================================================================
// AUTH
// ============================================================================

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl LoginForm {
    /// Hint shown under the password field while it is non-empty but too short.
    pub fn password_too_short(&self) -> bool {
        let len = char_len(&self.password);
        len > 0 && len < PASSWORD_MIN_CHARS
    }

    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && char_len(&self.password) >= PASSWORD_MIN_CHARS
    }

    /// Clear the credentials after a submission; the remember-me choice survives.
    pub fn clear_credentials(&mut self) {
        self.email.clear();
        self.password.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub terms_accepted: bool,
}

impl RegisterForm {
    /// Inline error for the password field. Silent while both password fields are empty.
    pub fn password_error(&self) -> Option<&'static str> {
        if self.password.is_empty() && self.confirm.is_empty() {
            return None;
        }
        (char_len(&self.password) < PASSWORD_MIN_CHARS).then_some(PASSWORD_TOO_SHORT)
    }

    /// Inline error for the confirmation field. Silent while it is empty.
    pub fn confirm_error(&self) -> Option<&'static str> {
        if self.confirm.is_empty() {
            return None;
        }
        (self.password != self.confirm).then_some(PASSWORDS_DIFFER)
    }

    pub fn can_submit(&self) -> bool {
        self.password_error().is_none()
            && self.confirm_error().is_none()
            && !self.password.is_empty()
            && !self.confirm.is_empty()
            && !self.email.is_empty()
            && !self.name.is_empty()
            && self.terms_accepted
    }
}

// ============================================================================
// KYC
// ============================================================================

/// Pessoa física (individual, CPF) or pessoa jurídica (company, CNPJ).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Individual,
    Company,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndividualFields {
    pub full_name: String,
    pub cpf: String,
    pub representative_cpf: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFields {
    pub legal_name: String,
    pub cnpj: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressFields {
    pub cep: String,
    pub street: String,
    pub number: String,
    /// Optional.
    pub complement: String,
    pub city: String,
    pub state: String,
}

impl AddressFields {
    fn is_complete(&self) -> bool {
        [&self.cep, &self.street, &self.number, &self.city, &self.state]
            .iter()
            .all(|field| !field.is_empty())
    }
}

/// The three uploads KYC requires. Each slot holds the selected file's name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KycDocuments {
    pub front: Option<String>,
    pub back: Option<String>,
    pub selfie: Option<String>,
}

impl KycDocuments {
    pub fn is_complete(&self) -> bool {
        self.front.is_some() && self.back.is_some() && self.selfie.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KycForm {
    pub account_type: Option<AccountType>,
    pub individual: IndividualFields,
    pub company: CompanyFields,
    pub address: AddressFields,
    pub documents: KycDocuments,
}

impl KycForm {
    /// Only the selected branch's fields count; the other branch may hold stale input.
    pub fn can_submit(&self) -> bool {
        let branch_complete = match self.account_type {
            Some(AccountType::Individual) => {
                let pf = &self.individual;
                !pf.full_name.is_empty() && !pf.cpf.is_empty() && !pf.representative_cpf.is_empty()
            }
            Some(AccountType::Company) => {
                !self.company.legal_name.is_empty() && !self.company.cnpj.is_empty()
            }
            None => return false,
        };
        branch_complete && self.address.is_complete() && self.documents.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::WITHDRAWAL_AVAILABLE_CENTS;

    #[test]
    fn test_sale_bounds() {
        assert!(!sale_amount_valid(499));
        assert!(sale_amount_valid(500));
        assert!(sale_amount_valid(50_000));
        assert!(!sale_amount_valid(50_001));
        assert!(!sale_amount_valid(0));
    }

    #[test]
    fn test_withdrawal_bounds() {
        let quote = |amount| WithdrawalQuote::new(amount, WITHDRAWAL_AVAILABLE_CENTS, WITHDRAWAL_FEE_CENTS);

        assert!(!quote(500).valid);
        assert_eq!(quote(500).net, 0);

        let q = quote(501);
        assert!(q.valid);
        assert_eq!(q.net, 1);

        let q = quote(99_500);
        assert!(q.valid);
        assert_eq!(q.net, 99_000);
        assert_eq!(q.max_payable, 99_500);

        assert!(!quote(99_501).valid);
        assert_eq!(quote(0).net, 0);
    }

    #[test]
    fn test_withdrawal_with_balance_below_fee() {
        let q = WithdrawalQuote::new(600, 300, WITHDRAWAL_FEE_CENTS);
        assert_eq!(q.max_payable, 0);
        assert!(!q.valid);
    }

    #[test]
    fn test_login() {
        let mut form = LoginForm {
            email: "ana@solutpag.com".into(),
            password: "abc1234".into(),
            remember: true,
        };
        assert!(form.password_too_short());
        assert!(!form.can_submit());

        form.password.push('5');
        assert!(!form.password_too_short());
        assert!(form.can_submit());

        form.email.clear();
        assert!(!form.can_submit());

        form.clear_credentials();
        assert!(!form.password_too_short());
        assert!(form.remember);
    }

    fn register() -> RegisterForm {
        RegisterForm {
            name: "Ana".into(),
            email: "ana@solutpag.com".into(),
            password: "abc12345".into(),
            confirm: "abc12345".into(),
            terms_accepted: true,
        }
    }

    #[test]
    fn test_register_short_password() {
        let form = RegisterForm {
            password: "abc1234".into(),
            confirm: "abc1234".into(),
            ..register()
        };
        assert_eq!(form.password_error(), Some(PASSWORD_TOO_SHORT));
        assert!(!form.can_submit());
    }

    #[test]
    fn test_register_mismatch_blocks_even_with_terms() {
        let mut form = RegisterForm {
            confirm: "abc12346".into(),
            ..register()
        };
        assert_eq!(form.password_error(), None);
        assert_eq!(form.confirm_error(), Some(PASSWORDS_DIFFER));
        assert!(!form.can_submit());

        form.terms_accepted = false;
        assert!(!form.can_submit());
    }

    #[test]
    fn test_register_requires_terms_and_fields() {
        assert!(register().can_submit());
        assert!(!RegisterForm { terms_accepted: false, ..register() }.can_submit());
        assert!(!RegisterForm { name: String::new(), ..register() }.can_submit());
        assert!(!RegisterForm { confirm: String::new(), ..register() }.can_submit());
    }

    #[test]
    fn test_register_errors_silent_when_empty() {
        let form = RegisterForm::default();
        assert_eq!(form.password_error(), None);
        assert_eq!(form.confirm_error(), None);
        assert!(!form.can_submit());

        // typing only a confirmation already flags the empty password
        let form = RegisterForm { confirm: "x".into(), ..RegisterForm::default() };
        assert_eq!(form.password_error(), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_password_length_counts_characters() {
        let form = LoginForm {
            email: "a@b.co".into(),
            password: "çãoçãoçã".into(),
            remember: false,
        };
        assert!(form.can_submit());
    }

    fn kyc_ready(account_type: AccountType) -> KycForm {
        KycForm {
            account_type: Some(account_type),
            individual: IndividualFields {
                full_name: "Ana Souza".into(),
                cpf: "123.456.789-00".into(),
                representative_cpf: "123.456.789-00".into(),
            },
            company: CompanyFields {
                legal_name: "Souza LTDA".into(),
                cnpj: "12.345.678/0001-00".into(),
            },
            address: AddressFields {
                cep: "27000-000".into(),
                street: "Rua A".into(),
                number: "10".into(),
                complement: String::new(),
                city: "Resende".into(),
                state: "RJ".into(),
            },
            documents: KycDocuments {
                front: Some("frente.jpg".into()),
                back: Some("verso.jpg".into()),
                selfie: Some("selfie.jpg".into()),
            },
        }
    }

    #[test]
    fn test_kyc_requires_account_type() {
        let form = KycForm { account_type: None, ..kyc_ready(AccountType::Individual) };
        assert!(!form.can_submit());
    }

    #[test]
    fn test_kyc_branches() {
        assert!(kyc_ready(AccountType::Individual).can_submit());
        assert!(kyc_ready(AccountType::Company).can_submit());

        let mut form = kyc_ready(AccountType::Company);
        form.individual = IndividualFields::default();
        assert!(form.can_submit(), "individual fields are irrelevant for companies");

        form.company.cnpj.clear();
        assert!(!form.can_submit());
    }

    #[test]
    fn test_kyc_requires_all_documents_and_address() {
        let mut form = kyc_ready(AccountType::Individual);
        form.documents.selfie = None;
        assert!(!form.can_submit());

        let mut form = kyc_ready(AccountType::Individual);
        form.address.city.clear();
        assert!(!form.can_submit());
    }

    #[test]
    fn test_submit_state_transitions() {
        let mut state = SubmitState::default();
        state.finish();
        assert_eq!(state, SubmitState::Idle);

        assert!(state.begin());
        assert!(state.is_submitting());
        assert!(!state.begin());

        state.finish();
        assert!(state.is_success());

        state.reset();
        assert_eq!(state, SubmitState::Idle);
    }
}
