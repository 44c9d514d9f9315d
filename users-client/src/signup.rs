//! Sign-up form state and the token-then-register flow.

use crate::models::{NewUser, PhotoUpload, Position, RegistrationResponse};
use crate::outcome::{ApiFailure, Outcome};
use crate::phone::sanitize_phone_input;
use crate::traits::UsersApi;
use crate::validation::{is_valid_email, is_valid_name, is_valid_phone, FieldErrors, PhoneRule};
use tracing::{info, warn};

/// Editable state of the sign-up form
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    /// Bare digits, at most ten
    pub phone: String,
    pub position: Option<Position>,
    pub photo: Option<PhotoUpload>,
    /// Result of the last validation pass
    pub errors: FieldErrors,
    /// Positions offered by the server; `Loading` until fetched
    pub positions: Outcome<Vec<Position>>,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            position: None,
            photo: None,
            errors: FieldErrors::default(),
            positions: Outcome::Loading,
        }
    }
}

impl SignUpForm {
    /// Check every field, without touching the network
    pub fn check(&self, rule: PhoneRule) -> FieldErrors {
        FieldErrors {
            name: !is_valid_name(&self.name),
            email: !is_valid_email(&self.email),
            phone: !is_valid_phone(&self.phone, rule),
            position: self.position.is_none(),
            photo: self.photo.is_none(),
        }
    }

    /// Assemble the registration payload if every field is valid
    pub fn to_new_user(&self, rule: PhoneRule) -> Result<NewUser, FieldErrors> {
        let errors = self.check(rule);
        match (&self.position, &self.photo) {
            (Some(position), Some(photo)) if errors.is_empty() => Ok(NewUser {
                name: self.name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                position_id: position.id,
                photo: photo.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// How a submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpResult {
    Registered(RegistrationResponse),
    /// Local validation failed; nothing was sent
    Invalid(FieldErrors),
    /// Token or registration failed; one generic error for every cause
    Failed(ApiFailure),
    Aborted,
}

/// Drives the sign-up screen: positions, form edits, submission
pub struct SignUpController<A> {
    api: A,
    rule: PhoneRule,
    form: SignUpForm,
}

impl<A: UsersApi> SignUpController<A> {
    pub fn new(api: A, rule: PhoneRule) -> Self {
        Self {
            api,
            rule,
            form: SignUpForm::default(),
        }
    }

    pub fn form(&self) -> &SignUpForm {
        &self.form
    }

    pub fn phone_rule(&self) -> PhoneRule {
        self.rule
    }

    /// Fetch the selectable positions into the form
    pub async fn load_positions(&mut self) -> &Outcome<Vec<Position>> {
        self.form.positions = Outcome::Loading;
        self.form.positions = match self.api.get_positions().await {
            Outcome::Success(response) if response.success => Outcome::Success(response.positions),
            Outcome::Success(_) | Outcome::SuccessEmpty | Outcome::Loading => {
                Outcome::Error(ApiFailure::unknown().with_detail("positions unavailable"))
            }
            Outcome::Error(failure) => Outcome::Error(failure),
            Outcome::Aborted => Outcome::Aborted,
        };
        &self.form.positions
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.form.name = name.into();
    }

    pub fn set_email<S: Into<String>>(&mut self, email: S) {
        self.form.email = email.into();
    }

    /// Store the phone as bare digits, whatever decoration was typed
    pub fn set_phone(&mut self, phone: &str) {
        self.form.phone = sanitize_phone_input(phone);
    }

    pub fn select_position(&mut self, position: Position) {
        self.form.position = Some(position);
    }

    /// Select a position by id among the loaded ones. Returns whether it was found.
    pub fn select_position_id(&mut self, id: i64) -> bool {
        let found = self
            .form
            .positions
            .as_success()
            .and_then(|positions| positions.iter().find(|p| p.id == id).cloned());
        match found {
            Some(position) => {
                self.form.position = Some(position);
                true
            }
            None => false,
        }
    }

    pub fn attach_photo(&mut self, photo: PhotoUpload) {
        self.form.photo = Some(photo);
    }

    /// Validate the form and record the field errors. Returns whether it passed.
    pub fn validate(&mut self) -> bool {
        self.form.errors = self.form.check(self.rule);
        self.form.errors.is_empty()
    }

    /// Validate, fetch a token, then register
    pub async fn submit(&mut self) -> SignUpResult {
        let user = match self.form.to_new_user(self.rule) {
            Ok(user) => {
                self.form.errors = FieldErrors::default();
                user
            }
            Err(errors) => {
                self.form.errors = errors;
                return SignUpResult::Invalid(errors);
            }
        };

        let token = match self.api.get_token().await {
            Outcome::Success(response) if response.success => response.token,
            Outcome::Aborted => return SignUpResult::Aborted,
            other => {
                warn!(outcome = %other.map(|_| ()), "Could not obtain a registration token");
                return SignUpResult::Failed(ApiFailure::unknown());
            }
        };

        match self.api.register_user(&token, &user).await {
            Outcome::Success(response) if response.success => {
                info!(user_id = ?response.user_id, "User registered");
                SignUpResult::Registered(response)
            }
            Outcome::Aborted => SignUpResult::Aborted,
            other => {
                warn!(outcome = %other.map(|_| ()), "Registration was not accepted");
                SignUpResult::Failed(ApiFailure::unknown())
            }
        }
    }
}
