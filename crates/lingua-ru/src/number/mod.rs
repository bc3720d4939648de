//! Russian numerals: plural agreement, integers in words, prices.

mod amount;
mod plural;
mod price;
mod spell;

pub use amount::{Amount, IntoAmount};
pub use plural::{
    BILLION_FORMS, KOPECK_FORMS, MILLION_FORMS, PluralForm, PluralForms, RUBLE_FORMS,
    THOUSAND_FORMS, plural,
};
pub use price::PriceSpeller;
pub use spell::spell_number;
