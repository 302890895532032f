//! Hand-wired owner shared by the unit tests. Mirrors what
//! `#[derive(Observed)]` emits for a struct with one validated + observed
//! field, one pre-validated + checked field, and one plain field.
//! Only the unchecked fields implement `Unchecked`.

use crate::{
    base::{PreValidate, Trim},
    field::{DefaultValue, Field, FieldId, Unchecked},
    owner::{Check, Observe, Observed, Validate},
    property::Property,
};

///
/// Thermostat
///

#[derive(Debug)]
pub struct Thermostat {
    pub target: Property<i32>,
    pub label: Property<String>,
    pub offset: Property<i64>,

    pub min: i32,
    pub max: i32,
    pub changed: Vec<ThermostatField>,
    pub target_observed: u32,
}

impl Default for Thermostat {
    fn default() -> Self {
        Self {
            target: Property::new(thermostat::Target::default_value()),
            label: Property::new(thermostat::Label::default_value()),
            offset: Property::new(thermostat::Offset::default_value()),
            min: 10,
            max: 30,
            changed: Vec::new(),
            target_observed: 0,
        }
    }
}

impl Observed for Thermostat {
    type Id = ThermostatField;
    const NAME: &'static str = "Thermostat";

    fn changed(&mut self, field: ThermostatField) {
        self.changed.push(field);
    }
}

impl Validate<thermostat::Target> for Thermostat {
    fn validate(&self, proposal: i32) -> i32 {
        proposal.clamp(self.min, self.max)
    }
}

impl Observe<thermostat::Target> for Thermostat {
    fn observe(&mut self) {
        self.target_observed += 1;
    }
}

impl Check<thermostat::Label> for Thermostat {
    type Error = &'static str;

    fn check(&self, proposal: &String) -> Result<(), Self::Error> {
        if proposal.is_empty() {
            Err("label must not be blank")
        } else {
            Ok(())
        }
    }
}

///
/// ThermostatField
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ThermostatField {
    Target,
    Label,
    Offset,
}

impl FieldId for ThermostatField {
    const OWNER: &'static str = "Thermostat";
    const ALL: &'static [Self] = &[Self::Target, Self::Label, Self::Offset];

    fn name(self) -> &'static str {
        match self {
            Self::Target => "target",
            Self::Label => "label",
            Self::Offset => "offset",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Target => 0,
            Self::Label => 1,
            Self::Offset => 2,
        }
    }
}

pub mod thermostat {
    pub struct Target;
    pub struct Label;
    pub struct Offset;
}

impl DefaultValue for thermostat::Target {
    fn default_value() -> i32 {
        20
    }
}

impl Unchecked for thermostat::Target {}

impl Field for thermostat::Target {
    type Owner = Thermostat;
    type Value = i32;

    const NAME: &'static str = "target";
    const ID: ThermostatField = ThermostatField::Target;

    fn validate(owner: &Thermostat, proposal: i32) -> i32 {
        <Thermostat as Validate<Self>>::validate(owner, proposal)
    }

    fn observe(owner: &mut Thermostat) {
        <Thermostat as Observe<Self>>::observe(owner);
    }

    fn cell(owner: &Thermostat) -> &Property<i32> {
        &owner.target
    }

    fn cell_mut(owner: &mut Thermostat) -> &mut Property<i32> {
        &mut owner.target
    }
}

impl DefaultValue for thermostat::Label {
    fn default_value() -> String {
        "idle".into()
    }
}

impl Field for thermostat::Label {
    type Owner = Thermostat;
    type Value = String;

    const NAME: &'static str = "label";
    const ID: ThermostatField = ThermostatField::Label;

    fn pre_validate(proposal: String) -> String {
        PreValidate::pre_validate(&Trim, proposal)
    }

    fn cell(owner: &Thermostat) -> &Property<String> {
        &owner.label
    }

    fn cell_mut(owner: &mut Thermostat) -> &mut Property<String> {
        &mut owner.label
    }
}

impl DefaultValue for thermostat::Offset {
    fn default_value() -> i64 {
        i64::default()
    }
}

impl Unchecked for thermostat::Offset {}

impl Field for thermostat::Offset {
    type Owner = Thermostat;
    type Value = i64;

    const NAME: &'static str = "offset";
    const ID: ThermostatField = ThermostatField::Offset;

    fn cell(owner: &Thermostat) -> &Property<i64> {
        &owner.offset
    }

    fn cell_mut(owner: &mut Thermostat) -> &mut Property<i64> {
        &mut owner.offset
    }
}

///
/// PlainWrite
///
/// `PlainWrite::<F>::OPEN` is true only when `F` accepts plain validated
/// assignment. Inherent consts shadow the trait fallback when their bound
/// holds, so the answer is decided at compile time.
///

pub struct PlainWrite<F>(std::marker::PhantomData<F>);

pub trait NoPlainWrite {
    const OPEN: bool = false;
}

impl<F> NoPlainWrite for PlainWrite<F> {}

impl<F: Unchecked> PlainWrite<F> {
    pub const OPEN: bool = true;
}
