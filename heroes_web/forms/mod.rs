mod hero_form;

pub use hero_form::{FieldError, FormErrors, HeroForm, HeroSubmission};
