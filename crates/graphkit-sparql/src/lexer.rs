use logos::Logos;

/// Raw lexical tokens. Keyword recognition is deliberately *not* done
/// here with per-keyword regexes (which would force one case-sensitive
/// token per casing) — `Ident` captures any bare word, and the parser
/// normalizes it to upper case and looks it up in [`crate::parser::keyword`]
/// so `select`/`Select`/`SELECT` all recognize identically (see
/// `crate::parser::keyword_of`).
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"#[^\n]*")]
pub enum Token<'a> {
    #[regex(r"\?[A-Za-z_][A-Za-z0-9_]*", |lex| &lex.slice()[1..])]
    Variable(&'a str),

    #[regex(r"<[^>]*>", |lex| { let s = lex.slice(); &s[1..s.len()-1] })]
    IriRef(&'a str),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| { let s = lex.slice(); &s[1..s.len()-1] })]
    StringLiteral(&'a str),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*:[A-Za-z_][A-Za-z0-9_]*")]
    PrefixedName(&'a str),

    /// A bare `prefix:` with no local part, as it appears in a `PREFIX`
    /// declaration (`PREFIX ex: <http://...>`).
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*:", |lex| { let s = lex.slice(); &s[..s.len()-1] })]
    PrefixDecl(&'a str),

    #[regex(r"_:[A-Za-z_][A-Za-z0-9_]*", |lex| &lex.slice()[2..])]
    BlankNodeLabel(&'a str),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident(&'a str),

    #[regex(r"[0-9]+\.[0-9]+")]
    Decimal(&'a str),

    #[regex(r"[0-9]+")]
    Integer(&'a str),

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("^^")]
    DoubleCaret,
    #[token("@")]
    At,

    #[token("<=")]
    Le,
    #[token(">=")]
    Ge,
    #[token("!=")]
    Ne,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("!")]
    Bang,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
}

impl<'a> Token<'a> {
    /// A human-readable rendering for error messages — the offending
    /// token text, as required by the parser's error contract.
    pub fn describe(&self) -> String {
        match self {
            Token::Variable(v) => format!("?{v}"),
            Token::IriRef(i) => format!("<{i}>"),
            Token::StringLiteral(s) => format!("\"{s}\""),
            Token::PrefixedName(p) => p.to_string(),
            Token::PrefixDecl(p) => format!("{p}:"),
            Token::BlankNodeLabel(b) => format!("_:{b}"),
            Token::Ident(i) => i.to_string(),
            Token::Decimal(d) => d.to_string(),
            Token::Integer(n) => n.to_string(),
            Token::LBrace => "{".into(),
            Token::RBrace => "}".into(),
            Token::LParen => "(".into(),
            Token::RParen => ")".into(),
            Token::Dot => ".".into(),
            Token::Comma => ",".into(),
            Token::Semicolon => ";".into(),
            Token::DoubleCaret => "^^".into(),
            Token::At => "@".into(),
            Token::Le => "<=".into(),
            Token::Ge => ">=".into(),
            Token::Ne => "!=".into(),
            Token::Eq => "=".into(),
            Token::Lt => "<".into(),
            Token::Gt => ">".into(),
            Token::AndAnd => "&&".into(),
            Token::OrOr => "||".into(),
            Token::Bang => "!".into(),
            Token::Plus => "+".into(),
            Token::Minus => "-".into(),
            Token::Star => "*".into(),
            Token::Slash => "/".into(),
        }
    }
}

/// Tokenizes the entire input eagerly; SPARQL query text is small enough
/// that a streaming lexer buys nothing and a materialized `Vec` makes
/// the recursive-descent parser's lookahead trivial.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Token::lexer(input).filter_map(|r| r.ok()).collect()
}
