//! Declension of full names.
//!
//! Each name part runs through its own ordered pipeline of [`Stage`]s. The
//! first stage that applies decides the result; a part that no stage accepts
//! is left unchanged.

use log::{debug, trace};

use crate::error::LinguaError;
use crate::name::gender::infer_gender;
use crate::name::person::PersonName;
use crate::name::rules::{
    GIVEN_NAME_STAGES, IRREGULAR_INSTRUMENTAL, PATRONYMIC_STAGES, SURNAME_STAGES, Stage, Step,
};
use crate::name::suffix::apply_first;
use crate::types::{Case, Gender};

/// Per-call declension state, threaded through every pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclensionContext {
    pub gender: Gender,
    pub case: Case,
}

/// Decline a full name into `case`.
///
/// # Errors
///
/// Returns [`LinguaError::EmptyInput`] for a blank name and
/// [`LinguaError::MalformedName`] for a name with more than three parts.
///
/// ```
/// use lingua_ru::Case;
/// use lingua_ru::name::inflect;
///
/// assert_eq!(
///     inflect("Пушкин Александр Сергеевич", Case::Dative).unwrap(),
///     "Пушкину Александру Сергеевичу"
/// );
/// ```
pub fn inflect(full_name: &str, case: Case) -> Result<String, LinguaError> {
    let name = PersonName::parse(full_name)?;
    let ctx = DeclensionContext {
        gender: infer_gender(&name),
        case,
    };
    Ok(inflect_name(&name, ctx).to_string())
}

/// Decline every part of an already parsed name.
pub fn inflect_name(name: &PersonName, ctx: DeclensionContext) -> PersonName {
    PersonName {
        patronymic: name.patronymic.as_deref().map(|p| inflect_patronymic(p, ctx)),
        given_name: name.given_name.as_deref().map(|g| inflect_given_name(g, ctx)),
        surname: inflect_surname(&name.surname, ctx),
    }
}

/// Decline a patronymic. A patronymic no rule recognizes only gets the
/// "-ичем" to "-ичом" fix for Илья, Кузьма and Фома.
pub fn inflect_patronymic(patronymic: &str, ctx: DeclensionContext) -> String {
    if let Some(declined) = try_stages("patronymic", PATRONYMIC_STAGES, patronymic, ctx) {
        return declined;
    }
    IRREGULAR_INSTRUMENTAL
        .apply(patronymic, ctx.case)
        .unwrap_or_else(|| patronymic.to_string())
}

pub fn inflect_given_name(given_name: &str, ctx: DeclensionContext) -> String {
    let normalized = match given_name.strip_suffix("Пётр") {
        Some(head) => format!("{head}Петр"),
        None => given_name.to_string(),
    };
    run_stages("given name", GIVEN_NAME_STAGES, &normalized, ctx)
}

pub fn inflect_surname(surname: &str, ctx: DeclensionContext) -> String {
    if !ctx.gender.is_known() {
        trace!("surname {surname} kept: gender unknown");
        return surname.to_string();
    }
    run_stages("surname", SURNAME_STAGES, surname, ctx)
}

/// Run `word` through `stages`, returning the result of the first stage that
/// applies or the word itself.
fn run_stages(part: &str, stages: &[Stage], word: &str, ctx: DeclensionContext) -> String {
    try_stages(part, stages, word, ctx).unwrap_or_else(|| word.to_string())
}

/// The result of the first stage that applies, if any.
fn try_stages(
    part: &str,
    stages: &[Stage],
    word: &str,
    ctx: DeclensionContext,
) -> Option<String> {
    for (position, stage) in stages.iter().enumerate() {
        if !stage.admits(ctx.gender) {
            continue;
        }
        if let Some(result) = apply_step(stage.step, word, ctx) {
            debug!("{part} {word} -> {result} ({}, stage {position})", ctx.case);
            return Some(result);
        }
    }
    trace!("{part} {word}: no stage applies");
    None
}

fn apply_step(step: Step, word: &str, ctx: DeclensionContext) -> Option<String> {
    match step {
        Step::Exact(forms) => forms
            .iter()
            .find(|(nominative, _)| *nominative == word)
            .map(|(_, endings)| endings[ctx.case.index()].to_string()),
        Step::Keep(suffix) => suffix.matches(word).then(|| word.to_string()),
        Step::Rules(group) => apply_first(group.rules, word, ctx.case).map(|(position, result)| {
            trace!("rule {}[{position}] matched {word}", group.name);
            result
        }),
        Step::Append(endings) => Some(format!("{word}{}", endings[ctx.case.index()])),
    }
}
