use observant::prelude::*;

struct Port(u16);

#[derive(Observed)]
#[observed(no_default)]
struct Conn {
    port: Property<Port>,

    #[property(default = 3)]
    retries: Property<u8>,
}

impl Conn {
    fn new(port: u16) -> Self {
        Self {
            port: Property::new(Port(port)),
            retries: Property::new(<conn::Retries as observant::DefaultValue>::default_value()),
        }
    }
}

fn main() {
    let mut conn = Conn::new(80);
    conn.set_port(Port(443));
    conn.set_retries(5u8);

    assert_eq!(conn.port().0, 443);
    assert_eq!(*conn.retries(), 5);
}
