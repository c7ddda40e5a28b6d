use std::fmt::Display;
use std::str::FromStr;

use anyhow::anyhow;
use indexmap::IndexMap;

macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Display for $name {
            fn fmt(
                &self,
                f: &mut std::fmt::Formatter<'_>,
            ) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

label_enum! {
    /// Classification mechanisms. The label is the output key.
    #[derive(PartialOrd, Ord)]
    Mechanism {
        Tdbd => "TDBD",
        NewTdbd => "newTDBD",
        Ea => "EA",
        EaLowG => "EAlowG",
        TanDupEa => "TanDupEA",
        InvEa => "InvEA",
    }
}

label_enum! {
    /// Outcome of the TDBD and newTDBD classifiers.
    TdbdClass {
        Tdbd => "TDBD",
        Mixed => "Mixed",
        Gde => "GDE",
        NoData => "NoData",
    }
}

label_enum! {
    EaClass {
        Ea => "EA",
        EaGde => "EA+GDE",
        OnlyGde => "onlyGDE",
        NoData => "NoData",
    }
}

label_enum! {
    EaLowGClass {
        EaLowG => "EAlowG",
        EaGde => "EA+GDE",
        OnlyGde => "onlyGDE",
        NoData => "NoData",
    }
}

label_enum! {
    TanDupEaClass {
        TanDupEa => "TanDupEA",
        OnlyGde => "onlyGDE",
        NoData => "NoData",
        NotApplicable => "NA",
    }
}

label_enum! {
    InvEaClass {
        EnhancerInvEa => "EnhancerInvEA",
        GeneInvEa => "GeneInvEA",
        NoInvEa => "noInvEA",
        NotApplicable => "NA",
    }
}

impl Mechanism {
    /// Whether the classifier compares gene sets against target genes.
    pub fn needs_target_genes(&self) -> bool {
        matches!(self, Mechanism::Tdbd | Mechanism::Ea | Mechanism::EaLowG)
    }
}

impl FromStr for Mechanism {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mechanism::ALL
            .iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| anyhow!("Unknown mechanism: {s}"))
    }
}

/// A classification result. The variant fixes the mechanism it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    Tdbd(TdbdClass),
    NewTdbd(TdbdClass),
    Ea(EaClass),
    EaLowG(EaLowGClass),
    TanDupEa(TanDupEaClass),
    InvEa(InvEaClass),
}

impl Effect {
    pub fn mechanism(&self) -> Mechanism {
        match self {
            Effect::Tdbd(_) => Mechanism::Tdbd,
            Effect::NewTdbd(_) => Mechanism::NewTdbd,
            Effect::Ea(_) => Mechanism::Ea,
            Effect::EaLowG(_) => Mechanism::EaLowG,
            Effect::TanDupEa(_) => Mechanism::TanDupEa,
            Effect::InvEa(_) => Mechanism::InvEa,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Effect::Tdbd(c) | Effect::NewTdbd(c) => c.as_str(),
            Effect::Ea(c) => c.as_str(),
            Effect::EaLowG(c) => c.as_str(),
            Effect::TanDupEa(c) => c.as_str(),
            Effect::InvEa(c) => c.as_str(),
        }
    }
}

impl Display for Effect {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-CNV classification results keyed by mechanism.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectMechanisms {
    inner: IndexMap<Mechanism, Effect>,
}

impl EffectMechanisms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `effect` under its mechanism, returning the previous result of
    /// that mechanism.
    pub fn set(
        &mut self,
        effect: Effect,
    ) -> Option<Effect> {
        self.inner.insert(effect.mechanism(), effect)
    }

    pub fn get(
        &self,
        mechanism: Mechanism,
    ) -> Option<Effect> {
        self.inner.get(&mechanism).copied()
    }

    pub fn label(
        &self,
        mechanism: Mechanism,
    ) -> Option<&'static str> {
        self.get(mechanism).map(|e| e.label())
    }

    pub fn mechanisms(&self) -> impl Iterator<Item = Mechanism> + '_ {
        self.inner.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.inner.values()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
