use std::collections::BTreeMap;

use log::error;

use crate::{DEFAULT_REPS, Exercise, MuscleGroup, Name, Reps, WeightPair, range};

/// Immutable application configuration: the display title and the default
/// exercise list of every muscle group.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub default_reps: Reps,
    pub groups: BTreeMap<MuscleGroup, GroupConfig>,
}

impl Config {
    #[must_use]
    pub fn title(&self, group: MuscleGroup) -> &str {
        self.groups
            .get(&group)
            .map_or_else(|| group.id(), |g| g.title.as_str())
    }

    #[must_use]
    pub fn template(&self, group: MuscleGroup) -> Vec<Exercise> {
        self.groups
            .get(&group)
            .map(|g| {
                g.template
                    .iter()
                    .enumerate()
                    .map(|(order, entry)| entry.exercise(order, self.default_reps))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn groups(&self) -> impl Iterator<Item = MuscleGroup> + '_ {
        self.groups.keys().copied()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_reps: DEFAULT_REPS,
            groups: DEFAULT_TEMPLATES
                .iter()
                .map(|(group, title, entries)| {
                    (
                        *group,
                        GroupConfig {
                            title: (*title).to_string(),
                            template: entries
                                .iter()
                                .filter_map(|(name, weights)| TemplateEntry::new(name, *weights))
                                .collect(),
                        },
                    )
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupConfig {
    pub title: String,
    pub template: Vec<TemplateEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateEntry {
    pub name: Name,
    pub weights: TemplateWeights,
}

impl TemplateEntry {
    fn new(name: &str, weights: RawWeights) -> Option<Self> {
        match Name::new(name) {
            Ok(name) => Some(Self {
                name,
                weights: weights.into(),
            }),
            Err(err) => {
                error!("invalid template exercise \"{name}\": {err}");
                None
            }
        }
    }

    #[must_use]
    pub fn exercise(&self, order: usize, reps: Reps) -> Exercise {
        Exercise {
            sets: self.weights.pair().sets(reps),
            ..Exercise::new(self.name.clone(), order)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TemplateWeights {
    /// Weight range interpreted by [`range::parse`].
    Range(String),
    /// Explicit weights for ranges the generic grammar does not cover, such
    /// as descending three-part ranges. `raw` keeps the written form.
    Override { raw: String, pair: WeightPair },
}

impl TemplateWeights {
    #[must_use]
    pub fn pair(&self) -> WeightPair {
        match self {
            TemplateWeights::Range(raw) => range::parse(raw),
            TemplateWeights::Override { pair, .. } => *pair,
        }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            TemplateWeights::Range(raw) | TemplateWeights::Override { raw, .. } => raw,
        }
    }
}

#[derive(Clone, Copy)]
enum RawWeights {
    Range(&'static str),
    Override(&'static str, f32, f32),
}

impl From<RawWeights> for TemplateWeights {
    fn from(value: RawWeights) -> Self {
        match value {
            RawWeights::Range(raw) => TemplateWeights::Range(raw.to_string()),
            RawWeights::Override(raw, warmup, formal) => TemplateWeights::Override {
                raw: raw.to_string(),
                pair: match (warmup.try_into(), formal.try_into()) {
                    (Ok(warmup), Ok(formal)) => WeightPair::new(warmup, formal),
                    _ => {
                        error!("invalid weight override for \"{raw}\"");
                        range::parse(raw)
                    }
                },
            },
        }
    }
}

type Template = (MuscleGroup, &'static str, &'static [(&'static str, RawWeights)]);

const DEFAULT_TEMPLATES: &[Template] = &[
    (
        MuscleGroup::Chest,
        "胸",
        &[
            ("杠铃卧推", RawWeights::Range("40-60")),
            ("上斜哑铃卧推", RawWeights::Range("15～20")),
            ("蝴蝶机夹胸", RawWeights::Range("22.5-25")),
            ("双杠臂屈伸", RawWeights::Range("空")),
            ("绳索夹胸", RawWeights::Range("10-12.5半")),
        ],
    ),
    (
        MuscleGroup::Back,
        "背",
        &[
            ("引体向上", RawWeights::Range("空")),
            ("高位下拉", RawWeights::Range("40-50")),
            ("杠铃划船", RawWeights::Range("30-40")),
            ("坐姿划船", RawWeights::Range("35～45")),
            ("单臂哑铃划船", RawWeights::Range("15-20半")),
        ],
    ),
    (
        MuscleGroup::Legs,
        "腿",
        &[
            ("深蹲", RawWeights::Range("60-80")),
            ("腿举", RawWeights::Range("100-140")),
            ("腿屈伸", RawWeights::Range("30-35")),
            ("腿弯举", RawWeights::Range("25～30")),
            ("提踵", RawWeights::Range("40")),
        ],
    ),
    (
        MuscleGroup::Shoulders,
        "肩",
        &[
            ("哑铃推举", RawWeights::Range("12.5-17.5")),
            ("侧平举", RawWeights::Range("7.5半")),
            // Descending drop set, warmed up with the lightest weight.
            ("反向飞鸟", RawWeights::Override("21-18-14", 14.0, 21.0)),
            ("面拉", RawWeights::Range("15～10")),
            ("耸肩", RawWeights::Range("27")),
        ],
    ),
    (
        MuscleGroup::Arms,
        "手臂",
        &[
            ("杠铃弯举", RawWeights::Range("20-25")),
            ("绳索下压", RawWeights::Range("15～10")),
            ("锤式弯举", RawWeights::Range("10半")),
            ("窄距卧推", RawWeights::Range("30-40")),
            ("牧师凳弯举", RawWeights::Range("15-17.5")),
        ],
    ),
];
