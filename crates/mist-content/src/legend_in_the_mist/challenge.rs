//! # Legend in the Mist — Challenge
//!
//! The Challenge profile represents NPCs and situations that pose a
//! threat to the Heroes, their Quests, or their goals. The definition
//! mirrors the published content format: a root object with narrative
//! metadata, plus Might, Limit, Threat, and Special Feature sub-objects.
//!
//! Every field carries a description and examples so downstream tooling
//! can generate author-facing documentation from the compiled artifact.

use mist_schema::{
    ArraySpec, BoolSpec, EnumSpec, Field, IntegerSpec, Kind, ObjectSpec, Schema, StringSpec,
};
use serde_json::json;

fn string(spec: StringSpec) -> Schema {
    Schema::new(Kind::String(spec))
}

fn trimmed_non_empty() -> StringSpec {
    StringSpec {
        trim: true,
        min_len: Some(1),
        ..Default::default()
    }
}

fn might_level_variants() -> Vec<String> {
    vec![
        "origin".to_string(),
        "adventure".to_string(),
        "greatness".to_string(),
    ]
}

fn publication_type_variants() -> Vec<String> {
    vec![
        "official".to_string(),
        "third_party".to_string(),
        "cauldron".to_string(),
        "homebrew".to_string(),
    ]
}

/// Relative scale of a Challenge's Might or influence in the fiction.
pub fn might_level_enum() -> Schema {
    Schema::new(Kind::Enum(EnumSpec {
        variants: might_level_variants(),
        default: None,
    }))
    .with_description("Relative scale of a Challenge's Might or influence in the fiction.")
    .with_examples(vec![json!("origin"), json!("adventure"), json!("greatness")])
}

/// Where this content comes from; lets downstream tools filter sources.
pub fn publication_type_enum() -> Schema {
    Schema::new(Kind::Enum(EnumSpec {
        variants: publication_type_variants(),
        default: None,
    }))
    .with_description(
        "Where this content comes from. Use to help downstream tools filter sources.",
    )
    .with_examples(vec![json!("official"), json!("cauldron")])
}

/// An aspect in which the Challenge is Mighty, the level of that Might,
/// and any vulnerabilities.
pub fn might_schema() -> Schema {
    Schema::new(Kind::Object(ObjectSpec {
        fields: vec![
            Field::required(
                "name",
                string(trimmed_non_empty())
                    .with_description(
                        "A short label for the aspect in which this Challenge is Mighty.",
                    )
                    .with_examples(vec![
                        json!("Horse-sized"),
                        json!("Cunning spirit"),
                        json!("Organized crime"),
                    ]),
            ),
            Field::required(
                "level",
                Schema::new(Kind::Enum(EnumSpec {
                    variants: might_level_variants(),
                    default: Some("adventure".to_string()),
                }))
                .with_description(
                    "Level of this Might. Use to decide when a Hero's action could be \
                     Favored or Imperiled.",
                )
                .with_examples(vec![json!("origin"), json!("adventure"), json!("greatness")]),
            ),
            Field::optional(
                "vulnerability",
                string(StringSpec::default())
                    .nullable()
                    .with_description(
                        "Optional narrative situations in which the Might in this aspect is \
                         nullified and considered Origin.",
                    )
                    .with_examples(vec![json!("Silver weapons"), json!("Appeased by gifts")]),
            ),
        ],
    }))
    .with_description(
        "Describes an aspect in which this Challenge is Mighty, the level of that Might, \
         and any vulnerabilities.",
    )
}

/// A way to overcome (or not) a Challenge by giving it the right type and
/// tier of status.
pub fn limit_schema() -> Schema {
    Schema::new(Kind::Object(ObjectSpec {
        fields: vec![
            Field::required(
                "name",
                string(trimmed_non_empty())
                    .with_description("Action to undertake in order to overcome the Challenge.")
                    .with_examples(vec![json!("Avoid"), json!("Harm"), json!("Subdue")]),
            ),
            Field::required(
                "level",
                Schema::new(Kind::Integer(IntegerSpec {
                    min: Some(1),
                    max: Some(6),
                    default: Some(1),
                }))
                .with_description(
                    "Tier that relevant statuses need to reach in order to overcome the \
                     Challenge.",
                )
                .with_examples(vec![json!(3), json!(4)]),
            ),
            Field::optional(
                "is_immune",
                Schema::new(Kind::Boolean(BoolSpec {
                    default: Some(false),
                }))
                .with_description(
                    "If true, the Challenge ignores statuses targeting this Limit's vector.",
                )
                .with_examples(vec![json!(false)]),
            ),
            Field::optional(
                "is_progress",
                Schema::new(Kind::Boolean(BoolSpec {
                    default: Some(false),
                }))
                .with_description(
                    "If true, this Limit acts like a progress track that builds up towards a \
                     special outcome (see `on_max`).",
                )
                .with_examples(vec![json!(true)]),
            ),
            Field::optional(
                "on_max",
                string(StringSpec::default())
                    .nullable()
                    .with_description(
                        "Special Feature triggered as the outcome of a progress Limit (see \
                         `is_progress`). Supports inline Markdown.",
                    )
                    .with_examples(vec![
                        json!("Everyone in the community becomes {distrustful-3} of one another."),
                        json!(
                            "Deliver one of the **Invoke Deities** Consequences to the entire \
                             village."
                        ),
                    ]),
            ),
        ],
    }))
    .with_description(
        "Describes a certain way to overcome (or not) a Challenge by giving it the right \
         type and tier of status.",
    )
}

/// A reusable action the Challenge can take, with its possible outcomes.
pub fn threat_schema() -> Schema {
    Schema::new(Kind::Object(ObjectSpec {
        fields: vec![
            Field::required(
                "name",
                string(trimmed_non_empty())
                    .with_description(
                        "Action that the Challenge is beginning to take, prompting the Hero to \
                         take action to avoid or prevent the Threat from materializing.",
                    )
                    .with_examples(vec![
                        json!("Assert authority"),
                        json!("Ambush"),
                        json!("Conjure"),
                    ]),
            ),
            Field::required(
                "description",
                string(StringSpec {
                    trim: true,
                    min_len: Some(1),
                    max_len: Some(100),
                    default: None,
                })
                .with_description(
                    "Concise text that elaborates how this Threat looks or escalates. \
                     Supports inline Markdown.",
                )
                .with_examples(vec![
                    json!("Appear at the most inopportune time, making things awkward"),
                    json!("Lift its arms as the ground begins to shake"),
                    json!(
                        "Show up, present a copy of the {signed infernal contract} and demand \
                         obedience"
                    ),
                ]),
            ),
            Field::required(
                "consequences",
                Schema::new(Kind::Array(ArraySpec {
                    items: Box::new(
                        string(trimmed_non_empty())
                            .with_description(
                                "Outcome of the Challenge's action if the Hero's action \
                                 generates Consequences or if the Threat is ignored. Supports \
                                 inline Markdown.",
                            )
                            .with_examples(vec![
                                json!("Give {nervous-2} to a bystander."),
                                json!("Raise the alarm (**Exposure**)."),
                                json!(
                                    "Time passes as the ferry creeps forward ({time-passes-1})."
                                ),
                            ]),
                    ),
                    min_items: Some(1),
                }))
                .with_description(
                    "List of concrete, referenceable outcomes the Threat can deliver.",
                ),
            ),
        ],
    }))
    .with_description("A reusable action the Challenge can take, with its possible outcomes.")
}

/// A rule unique to the Challenge, or an ability that cannot be expressed
/// with Threats and Consequences, tags, statuses, Limits or Might.
pub fn special_feature_schema() -> Schema {
    Schema::new(Kind::Object(ObjectSpec {
        fields: vec![
            Field::required(
                "name",
                string(trimmed_non_empty())
                    .with_description("Name of the Special Feature.")
                    .with_examples(vec![
                        json!("Petty grudge"),
                        json!("Dramatic feign"),
                        json!("Guarded"),
                    ]),
            ),
            Field::required(
                "description",
                string(trimmed_non_empty())
                    .with_description(
                        "Text describing the Special Feature's trigger (\"When this \
                         happens...\") and effect (\"... do this.\"). Supports inline Markdown.",
                    )
                    .with_examples(vec![
                        json!(
                            "If offended, gains {spiteful-3} and cannot be obliged until \
                             {appeased-3}."
                        ),
                        json!(
                            "The Narrator may choose to deliver the Challenge's Consequence \
                             during Establish instead of in the Consequence phase."
                        ),
                        json!(
                            "Whenever someone who could be linked to the Plotting Courtier \
                             learns of the Heroes' actions or whereabouts (**Exposure**), the \
                             Plotting Courtier gains a tag for it."
                        ),
                    ]),
            ),
        ],
    }))
    .with_description(
        "Rule unique to the Challenge or an ability that cannot be expressed with Threats \
         and Consequences, tags, statuses, Limits or Might.",
    )
}

/// Attribution and cataloging fields for the Challenge's origin.
pub fn meta_schema() -> Schema {
    Schema::new(Kind::Object(ObjectSpec {
        fields: vec![
            Field::required(
                "publication_type",
                Schema::new(Kind::Enum(EnumSpec {
                    variants: publication_type_variants(),
                    default: Some("homebrew".to_string()),
                }))
                .with_description(
                    "Classifies the Challenge's source to aid cataloging and tooling.",
                )
                .with_examples(vec![json!("official"), json!("cauldron")]),
            ),
            Field::optional(
                "source",
                string(StringSpec {
                    trim: true,
                    ..Default::default()
                })
                .with_description(
                    "Source title (book, supplement, PDF) where this Challenge appears.",
                )
                .with_examples(vec![
                    json!("Legend in the Mist - Core Book Volume II - The Narrator"),
                    json!("Lantern in the Mist - Sample Challenges"),
                ]),
            ),
            Field::optional(
                "authors",
                Schema::new(Kind::Array(ArraySpec {
                    items: Box::new(
                        string(trimmed_non_empty())
                            .with_description("One credited author name.")
                            .with_examples(vec![json!("Son of Oak"), json!("4rtamis")]),
                    ),
                    min_items: None,
                }))
                .with_description("List of credited authors or contributors."),
            ),
            Field::optional(
                "page",
                Schema::new(Kind::Integer(IntegerSpec {
                    min: Some(1),
                    max: None,
                    default: None,
                }))
                .with_description("Page number (if relevant to the source).")
                .with_examples(vec![json!(112), json!(126), json!(394)]),
            ),
        ],
    }))
    .with_description("Attribution and cataloging fields for the Challenge's origin.")
}

/// The root Challenge schema definition.
pub fn challenge_schema() -> Schema {
    Schema::new(Kind::Object(ObjectSpec {
        fields: vec![
            Field::required(
                "name",
                string(StringSpec {
                    trim: true,
                    min_len: Some(1),
                    max_len: None,
                    default: Some("Untitled Challenge".to_string()),
                })
                .with_description("The name/title of the Challenge.")
                .with_examples(vec![
                    json!("Avoided Acquaintance"),
                    json!("Commoner"),
                    json!("Boggart"),
                ]),
            ),
            Field::optional(
                "description",
                string(StringSpec {
                    trim: true,
                    ..Default::default()
                })
                .with_description(
                    "Short Narrator-facing summary of what this Challenge is. Supports \
                     inline Markdown.",
                )
                .with_examples(vec![
                    json!(
                        "A starving predator prowls this wilderness and it will not balk at \
                         bony travellers to sustain itself. When it pounces, its {stealthy-} \
                         status hinders reaction and is then removed."
                    ),
                    json!(
                        "Infernal spirits from the lowest circles of Hell, bound to mortal \
                         service by signed contracts."
                    ),
                    json!(""),
                ]),
            ),
            Field::required(
                "rating",
                Schema::new(Kind::Integer(IntegerSpec {
                    min: Some(1),
                    max: Some(5),
                    default: Some(1),
                }))
                .with_description(
                    "General indication of the Challenge's difficulty level (1-5).",
                )
                .with_examples(vec![json!(1), json!(3), json!(5)]),
            ),
            Field::optional(
                "roles",
                Schema::new(Kind::Array(ArraySpec {
                    items: Box::new(
                        string(trimmed_non_empty())
                            .with_description(
                                "Keyword that defines how this Challenge behaves in a scene.",
                            )
                            .with_examples(vec![
                                json!("Watcher"),
                                json!("Aggressor"),
                                json!("Obstacle"),
                            ]),
                    ),
                    min_items: None,
                }))
                .with_description(
                    "Define the Challenge's possible behaviors in a scene (see Legend in the \
                     Mist - Core Book Volume II - The Narrator, page 110).",
                ),
            ),
            Field::optional(
                "tags_and_statuses",
                Schema::new(Kind::Array(ArraySpec {
                    items: Box::new(
                        string(StringSpec {
                            trim: true,
                            ..Default::default()
                        })
                        .with_description(
                            "Story tags and statuses belonging to the Challenge upon entering \
                             the scene. Supports inline Markdown.",
                        )
                        .with_examples(vec![
                            json!("{alert-1}"),
                            json!("Three tags the imitated person possesses"),
                            json!("{sword}, {dagger} or {bow}"),
                        ]),
                    ),
                    min_items: None,
                }))
                .with_description(
                    "Describe the Challenge's features and its condition upon entering the \
                     scene.",
                ),
            ),
            Field::optional(
                "mights",
                Schema::new(Kind::Array(ArraySpec {
                    items: Box::new(might_schema()),
                    min_items: None,
                }))
                .with_description(
                    "Describe the aspects in which this Challenge is Mighty, the levels of \
                     those Mights, and any vulnerabilities.",
                ),
            ),
            Field::optional(
                "limits",
                Schema::new(Kind::Array(ArraySpec {
                    items: Box::new(limit_schema()),
                    min_items: None,
                }))
                .with_description(
                    "Define when the Challenge is overcome by using Detailed outcomes.",
                ),
            ),
            Field::optional(
                "threats",
                Schema::new(Kind::Array(ArraySpec {
                    items: Box::new(threat_schema()),
                    min_items: None,
                }))
                .with_description(
                    "Typical actions of the Challenge structured in Threats and their \
                     possible related Consequences.",
                ),
            ),
            Field::optional(
                "general_consequences",
                Schema::new(Kind::Array(ArraySpec {
                    items: Box::new(
                        string(StringSpec::default())
                            .with_description(
                                "Action the Challenge might take when a Hero's action \
                                 generates Consequences, regardless of Threat. Supports inline \
                                 Markdown.",
                            )
                            .with_examples(vec![
                                json!("You get lost in the revelry ({time-passes-1})."),
                                json!("Figure out someone's place of hiding (**Exposure**)."),
                                json!("Sniff around (remove two tiers from a sneaking status)."),
                            ]),
                    ),
                    min_items: None,
                }))
                .with_description(
                    "Describe the actions the Challenge can generally take when a Hero's \
                     action generates Consequences.",
                ),
            ),
            Field::optional(
                "special_features",
                Schema::new(Kind::Array(ArraySpec {
                    items: Box::new(special_feature_schema()),
                    min_items: None,
                }))
                .with_description(
                    "Rules unique to the Challenge or abilities that cannot be expressed \
                     with Threats and Consequences, tags, statuses, Limits or Might.",
                ),
            ),
            Field::optional(
                "meta",
                meta_schema().with_description(
                    "Attribution and cataloging fields for the Challenge's origin.",
                ),
            ),
        ],
    }))
    .with_title("Legend in the Mist Challenge")
    .with_description(
        "Legend in the Mist Challenge profile, used to represent NPCs and situations that \
         pose a threat to the Heroes, their Quests, or their goals.",
    )
}
