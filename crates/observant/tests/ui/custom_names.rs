use observant::prelude::*;

#[derive(Observed)]
#[observed(module = "knobs", id = "KnobId", crate = "::observant")]
pub struct Knob {
    #[property(default = -0.5)]
    angle: Property<f64>,
}

fn main() {
    let mut knob = Knob::default();
    knob.set_angle(0.25);

    let id: KnobId = <knobs::Angle as observant::Field>::ID;
    assert_eq!(id, KnobId::Angle);
}
