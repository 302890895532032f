mod panel {
    use observant::prelude::*;

    #[derive(Observed)]
    pub(crate) struct Panel {
        #[property(default = 3)]
        columns: Property<u16>,
    }
}

fn main() {
    use observant::ObservedExt;

    let mut panel = panel::Panel::default();
    let columns: u16 = *panel.assign::<panel::panel::Columns>(4u16);
    assert_eq!(columns, 4);
    assert_eq!(panel::PanelField::Columns.to_string(), "columns");
}
