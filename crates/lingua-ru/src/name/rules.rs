//! Declension and gender rule tables.
//!
//! Every table is ordered and evaluated first-match-wins. Endings are listed
//! as [genitive, dative, accusative, instrumental, prepositional].

use crate::name::suffix::{Suffix, SuffixRule};
use crate::types::Gender;

/// All Russian vowels.
pub const VOWELS: &str = "аеёиоуыэюя";

/// Possessive surname stems ("Иван-ов", "Пушк-ин").
const SURNAME_STEMS: &[&str] = &["ин", "ын", "ев", "ёв", "ов"];

/// Ending appended to masculine words that match no other rule.
pub const DEFAULT_ENDINGS: [&str; 5] = ["а", "у", "а", "ом", "е"];

/// A named, ordered group of suffix rules.
#[derive(Debug, Clone, Copy)]
pub struct RuleGroup {
    pub name: &'static str,
    pub rules: &'static [SuffixRule],
}

/// What a stage does when it applies.
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Replace the whole word when it equals one of the listed forms.
    Exact(&'static [(&'static str, [&'static str; 5])]),
    /// Leave the word unchanged when it ends with the suffix.
    Keep(Suffix),
    /// Rewrite with the first matching rule of the group.
    Rules(RuleGroup),
    /// Append a case ending.
    Append([&'static str; 5]),
}

/// One entry of a declension pipeline, optionally restricted to a gender.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub when: Option<Gender>,
    pub step: Step,
}

impl Stage {
    const fn any(step: Step) -> Self {
        Self { when: None, step }
    }

    const fn only(gender: Gender, step: Step) -> Self {
        Self {
            when: Some(gender),
            step,
        }
    }

    /// Whether the stage is considered for a name of `gender`.
    pub fn admits(&self, gender: Gender) -> bool {
        self.when.is_none_or(|required| required == gender)
    }
}

pub const MIDDLE: RuleGroup = RuleGroup {
    name: "middle",
    rules: &[
        SuffixRule::new(Suffix::literal("на"), ["ны", "не", "ну", "ной", "не"]),
        SuffixRule::new(Suffix::literal("ич"), ["ича", "ичу", "ича", "ичем", "иче"]),
        SuffixRule::new(Suffix::literal("ыч"), ["ыча", "ычу", "ыча", "ычем", "ыче"]),
    ],
};

pub const FIRST: RuleGroup = RuleGroup {
    name: "first",
    rules: &[
        SuffixRule::new(Suffix::literal("ия"), ["ии", "ии", "ию", "ией", "ие"]),
        SuffixRule::new(Suffix::letter("гжйкхчшщ", "а"), ["и", "е", "у", "ой", "е"]),
        SuffixRule::new(Suffix::literal("а"), ["ы", "е", "у", "ой", "е"]),
        SuffixRule::new(Suffix::literal("мя"), ["мени", "мени", "мя", "менем", "мени"]),
        SuffixRule::new(Suffix::literal("я"), ["и", "е", "ю", "ей", "е"]),
        SuffixRule::new(Suffix::literal("й"), ["я", "ю", "я", "ем", "е"]),
    ],
};

const FIRST_SOFT_MALE: RuleGroup = RuleGroup {
    name: "first_soft_m",
    rules: &[SuffixRule::new(Suffix::literal("ь"), ["я", "ю", "я", "ем", "е"])],
};

const FIRST_SOFT_FEMALE: RuleGroup = RuleGroup {
    name: "first_soft_f",
    rules: &[SuffixRule::new(Suffix::literal("ь"), ["и", "и", "ь", "ью", "и"])],
};

/// Given names declined irregularly, matched against the whole name.
pub const FIRST_EXCEPTIONS: &[(&str, [&str; 5])] = &[
    ("Лев", ["Льва", "Льву", "Льва", "Львом", "Льве"]),
    ("Зоя", ["Зои", "Зое", "Зою", "Зоей", "Зое"]),
];

pub const LAST: RuleGroup = RuleGroup {
    name: "last",
    rules: &[
        SuffixRule::new(Suffix::stem(SURNAME_STEMS, "а"), ["ой", "ой", "у", "ой", "ой"]),
        SuffixRule::new(Suffix::stem(SURNAME_STEMS, ""), ["а", "у", "а", "ым", "е"]),
        SuffixRule::new(Suffix::literal("ая"), ["ой", "ой", "ую", "ой", "ой"]),
        SuffixRule::new(Suffix::literal("яя"), ["ей", "ей", "юю", "ей", "ей"]),
        SuffixRule::new(Suffix::literal("кий"), ["кого", "кому", "кого", "ким", "ком"]),
        SuffixRule::new(Suffix::literal("ий"), ["его", "ему", "его", "им", "ем"]),
        SuffixRule::new(Suffix::literal("ый"), ["ого", "ому", "ого", "ым", "ом"]),
        SuffixRule::new(Suffix::literal("ой"), ["ого", "ому", "ого", "ым", "ом"]),
    ],
};

pub const LAST_MALE: RuleGroup = RuleGroup {
    name: "last_m",
    rules: &[
        SuffixRule::new(Suffix::literal("а"), ["ы", "е", "у", "ой", "е"]),
        SuffixRule::new(Suffix::literal("мя"), ["мени", "мени", "мя", "менем", "мени"]),
        SuffixRule::new(Suffix::literal("я"), ["и", "е", "ю", "ёй", "е"]),
        SuffixRule::new(Suffix::literal("й"), ["я", "ю", "й", "ем", "е"]),
        SuffixRule::new(Suffix::literal("ь"), ["я", "ю", "я", "ем", "е"]),
    ],
};

pub const PATRONYMIC_STAGES: &[Stage] = &[Stage::any(Step::Rules(MIDDLE))];

/// Fix for an already instrumental "-ичем" form of Илья, Кузьма or Фома that
/// no patronymic rule recognizes.
pub const IRREGULAR_INSTRUMENTAL: SuffixRule = SuffixRule::new(
    Suffix::stem(&["Иль", "Кузьм", "Фом"], "ичем"),
    ["ичом", "ичом", "ичом", "ичом", "ичом"],
);

pub const GIVEN_NAME_STAGES: &[Stage] = &[
    Stage::any(Step::Exact(FIRST_EXCEPTIONS)),
    Stage::any(Step::Keep(Suffix::letter("еёиоуыэю", ""))),
    Stage::any(Step::Keep(Suffix::letter(VOWELS, "а"))),
    Stage::any(Step::Keep(Suffix::letter("аёоуыэюя", "я"))),
    Stage::only(
        Gender::Female,
        Step::Keep(Suffix::letter("бвгджзклмнйпрстфхцчшщ", "")),
    ),
    Stage::only(Gender::Male, Step::Rules(FIRST_SOFT_MALE)),
    Stage::only(Gender::Female, Step::Rules(FIRST_SOFT_FEMALE)),
    Stage::any(Step::Rules(FIRST)),
    Stage::any(Step::Append(DEFAULT_ENDINGS)),
];

pub const SURNAME_STAGES: &[Stage] = &[
    Stage::any(Step::Keep(Suffix::letter("еёиоуыэю", ""))),
    Stage::any(Step::Keep(Suffix::letter(VOWELS, "а"))),
    Stage::any(Step::Keep(Suffix::letter("ёоуыэю", "я"))),
    Stage::any(Step::Keep(Suffix::letter("иы", "х"))),
    Stage::any(Step::Rules(LAST)),
    Stage::only(Gender::Male, Step::Rules(LAST_MALE)),
    Stage::only(Gender::Male, Step::Append(DEFAULT_ENDINGS)),
];

/// Gender signals carried by a surname, checked in order.
pub const GENDER_BY_SURNAME: &[(Suffix, Gender)] = &[
    (Suffix::stem(SURNAME_STEMS, "а"), Gender::Female),
    (Suffix::literal("ая"), Gender::Female),
    (Suffix::literal("яя"), Gender::Female),
    (Suffix::stem(SURNAME_STEMS, ""), Gender::Male),
    (Suffix::literal("ий"), Gender::Male),
    (Suffix::literal("ый"), Gender::Male),
];

/// Gender signals carried by a given name, checked in order.
pub const GENDER_BY_GIVEN_NAME: &[(Suffix, Gender)] = &[
    (Suffix::letter("ая", ""), Gender::Female),
    (Suffix::LastNotIn(VOWELS), Gender::Male),
];

/// Feminine patronymic ending; any other patronymic is masculine.
pub const FEMININE_PATRONYMIC: Suffix = Suffix::literal("на");
