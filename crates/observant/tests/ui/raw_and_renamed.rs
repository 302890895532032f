use observant::prelude::*;

#[derive(Debug, Observed)]
#[observed(no_default)]
struct Token {
    #[property(name = "kind")]
    r#type: Property<String>,

    #[property(skip)]
    origin: &'static str,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            r#type: Property::new("ident".into()),
            origin: "lexer",
        }
    }
}

fn main() {
    let mut token = Token::default();
    token.set_type("keyword");

    assert_eq!(token.r#type(), "keyword");
    assert_eq!(token.origin, "lexer");
    assert_eq!("kind".parse::<TokenField>(), Ok(TokenField::Type));
}
