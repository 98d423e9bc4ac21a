use std::collections::HashMap;

use graphkit_core::{BlankNode, GraphError, Iri, Literal, Result, Term};

use crate::algebra::{
    ArithOp, CmpOp, ConstructTemplate, DescribeTarget, Expression, GraphPattern, LogicOp,
    Modifiers, OrderDirection, Query, SelectVars, TermOrVar, TriplePatternAst, Var,
};
use crate::lexer::{tokenize, Token};

/// Keywords recognized case-insensitively; everything else that looks
/// like an identifier is left as a function-call name, resolved by the
/// executor's builtin table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Select,
    Construct,
    Ask,
    Describe,
    Where,
    Filter,
    Optional,
    Union,
    Distinct,
    Reduced,
    Limit,
    Offset,
    Order,
    By,
    Asc,
    Desc,
    Prefix,
}

fn keyword_of(word: &str) -> Option<Keyword> {
    Some(match word.to_ascii_uppercase().as_str() {
        "SELECT" => Keyword::Select,
        "CONSTRUCT" => Keyword::Construct,
        "ASK" => Keyword::Ask,
        "DESCRIBE" => Keyword::Describe,
        "WHERE" => Keyword::Where,
        "FILTER" => Keyword::Filter,
        "OPTIONAL" => Keyword::Optional,
        "UNION" => Keyword::Union,
        "DISTINCT" => Keyword::Distinct,
        "REDUCED" => Keyword::Reduced,
        "LIMIT" => Keyword::Limit,
        "OFFSET" => Keyword::Offset,
        "ORDER" => Keyword::Order,
        "BY" => Keyword::By,
        "ASC" => Keyword::Asc,
        "DESC" => Keyword::Desc,
        "PREFIX" => Keyword::Prefix,
        _ => return None,
    })
}

/// Parses `text` as a SPARQL query, producing an algebra [`Query`].
pub fn parse(text: &str) -> Result<Query> {
    let tokens = tokenize(text);
    let mut parser = Parser {
        tokens,
        pos: 0,
        prefixes: HashMap::new(),
    };
    parser.parse_query()
}

struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    prefixes: HashMap<String, String>,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token<'a>> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn error_unexpected(&self, expected: &str) -> GraphError {
        match self.peek() {
            Some(tok) => GraphError::UnexpectedToken {
                found: tok.describe(),
                expected: expected.to_string(),
            },
            None => GraphError::UnexpectedEof(expected.to_string()),
        }
    }

    fn peek_keyword(&self) -> Option<Keyword> {
        match self.peek() {
            Some(Token::Ident(word)) => keyword_of(word),
            _ => None,
        }
    }

    fn eat_keyword(&mut self, kw: Keyword) -> Result<()> {
        if self.peek_keyword() == Some(kw) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_unexpected(&format!("{kw:?}")))
        }
    }

    fn eat(&mut self, expected: Sym, label: &str) -> Result<()> {
        let matches = matches!(
            (self.peek(), expected),
            (Some(Token::LBrace), Sym::LBrace)
                | (Some(Token::RBrace), Sym::RBrace)
                | (Some(Token::LParen), Sym::LParen)
                | (Some(Token::RParen), Sym::RParen)
                | (Some(Token::Dot), Sym::Dot)
                | (Some(Token::Comma), Sym::Comma)
        );
        if matches {
            self.advance();
            Ok(())
        } else {
            Err(self.error_unexpected(label))
        }
    }

    fn parse_query(&mut self) -> Result<Query> {
        self.parse_prefix_decls()?;
        match self.peek_keyword() {
            Some(Keyword::Select) => self.parse_select(),
            Some(Keyword::Construct) => self.parse_construct(),
            Some(Keyword::Ask) => self.parse_ask(),
            Some(Keyword::Describe) => self.parse_describe(),
            _ => Err(self.error_unexpected("SELECT, CONSTRUCT, ASK, or DESCRIBE")),
        }
    }

    fn parse_prefix_decls(&mut self) -> Result<()> {
        while self.peek_keyword() == Some(Keyword::Prefix) {
            self.advance();
            let prefix = match self.advance() {
                Some(Token::PrefixDecl(p)) => p.to_string(),
                _ => return Err(self.error_unexpected("prefix name followed by ':'")),
            };
            let namespace = match self.advance() {
                Some(Token::IriRef(iri)) => iri.to_string(),
                _ => return Err(self.error_unexpected("<namespace IRI>")),
            };
            self.prefixes.insert(prefix, namespace);
        }
        Ok(())
    }

    fn resolve_prefixed(&self, text: &str) -> Result<Iri> {
        let (prefix, local) = text
            .split_once(':')
            .ok_or_else(|| GraphError::UnknownPrefix(text.to_string()))?;
        match self.prefixes.get(prefix) {
            Some(namespace) => Iri::new(format!("{namespace}{local}")),
            // Open question (SPEC_FULL.md §9): unknown prefixes fall back to
            // a literal IRI built from the raw prefixed-name text, matching
            // the ambiguity noted in the design notes rather than failing.
            None => Iri::new(text.to_string()),
        }
    }

    fn parse_select(&mut self) -> Result<Query> {
        self.eat_keyword(Keyword::Select)?;
        let distinct = if self.peek_keyword() == Some(Keyword::Distinct) {
            self.advance();
            true
        } else if self.peek_keyword() == Some(Keyword::Reduced) {
            self.advance();
            true
        } else {
            false
        };

        let variables = if matches!(self.peek(), Some(Token::Star)) {
            self.advance();
            SelectVars::All
        } else {
            let mut vars = Vec::new();
            while let Some(Token::Variable(name)) = self.peek() {
                vars.push(Var::new(*name));
                self.advance();
            }
            if vars.is_empty() {
                return Err(self.error_unexpected("a variable list or '*'"));
            }
            SelectVars::Vars(vars)
        };

        self.eat_keyword(Keyword::Where)?;
        self.eat(Sym::LBrace, "'{'")?;
        let where_clause = self.parse_group_body()?;
        self.eat(Sym::RBrace, "'}'")?;
        let modifiers = self.parse_modifiers()?;

        Ok(Query::Select {
            variables,
            distinct,
            where_clause,
            modifiers,
        })
    }

    fn parse_construct(&mut self) -> Result<Query> {
        self.eat_keyword(Keyword::Construct)?;
        self.eat(Sym::LBrace, "'{'")?;
        let mut template = Vec::new();
        while !matches!(self.peek(), Some(Token::RBrace)) {
            let subject = self.parse_term_or_var(Position::Subject)?;
            let predicate = self.parse_term_or_var(Position::Predicate)?;
            let object = self.parse_term_or_var(Position::Object)?;
            template.push(ConstructTemplate {
                subject,
                predicate,
                object,
            });
            if matches!(self.peek(), Some(Token::Dot)) {
                self.advance();
            }
        }
        self.eat(Sym::RBrace, "'}'")?;
        self.eat_keyword(Keyword::Where)?;
        self.eat(Sym::LBrace, "'{'")?;
        let where_clause = self.parse_group_body()?;
        self.eat(Sym::RBrace, "'}'")?;
        let modifiers = self.parse_modifiers()?;
        Ok(Query::Construct {
            template,
            where_clause,
            modifiers,
        })
    }

    fn parse_ask(&mut self) -> Result<Query> {
        self.eat_keyword(Keyword::Ask)?;
        if self.peek_keyword() == Some(Keyword::Where) {
            self.advance();
        }
        self.eat(Sym::LBrace, "'{'")?;
        let where_clause = self.parse_group_body()?;
        self.eat(Sym::RBrace, "'}'")?;
        Ok(Query::Ask { where_clause })
    }

    fn parse_describe(&mut self) -> Result<Query> {
        self.eat_keyword(Keyword::Describe)?;
        let mut resources = Vec::new();
        loop {
            match self.peek() {
                Some(Token::Variable(name)) => {
                    resources.push(DescribeTarget::Var(Var::new(*name)));
                    self.advance();
                }
                Some(Token::IriRef(iri)) => {
                    resources.push(DescribeTarget::Iri(Iri::new(*iri)?));
                    self.advance();
                }
                Some(Token::PrefixedName(name)) => {
                    resources.push(DescribeTarget::Iri(self.resolve_prefixed(name)?));
                    self.advance();
                }
                _ => break,
            }
        }
        if resources.is_empty() {
            return Err(self.error_unexpected("one or more resources to describe"));
        }
        let where_clause = if self.peek_keyword() == Some(Keyword::Where) {
            self.advance();
            self.eat(Sym::LBrace, "'{'")?;
            let patterns = self.parse_group_body()?;
            self.eat(Sym::RBrace, "'}'")?;
            Some(patterns)
        } else {
            None
        };
        Ok(Query::Describe {
            resources,
            where_clause,
        })
    }

    fn parse_modifiers(&mut self) -> Result<Modifiers> {
        let mut modifiers = Modifiers::default();
        loop {
            match self.peek_keyword() {
                Some(Keyword::Order) => {
                    self.advance();
                    self.eat_keyword(Keyword::By)?;
                    loop {
                        let direction = match self.peek_keyword() {
                            Some(Keyword::Asc) => {
                                self.advance();
                                OrderDirection::Asc
                            }
                            Some(Keyword::Desc) => {
                                self.advance();
                                OrderDirection::Desc
                            }
                            _ => OrderDirection::Asc,
                        };
                        match self.peek() {
                            Some(Token::Variable(name)) => {
                                let var = Var::new(*name);
                                self.advance();
                                modifiers.order_by.push((var, direction));
                            }
                            _ => break,
                        }
                    }
                }
                Some(Keyword::Limit) => {
                    self.advance();
                    modifiers.limit = Some(self.parse_unsigned_integer()?);
                }
                Some(Keyword::Offset) => {
                    self.advance();
                    modifiers.offset = Some(self.parse_unsigned_integer()?);
                }
                _ => break,
            }
        }
        Ok(modifiers)
    }

    fn parse_unsigned_integer(&mut self) -> Result<usize> {
        match self.advance() {
            Some(Token::Integer(text)) => text
                .parse()
                .map_err(|_| GraphError::UnexpectedToken {
                    found: text.to_string(),
                    expected: "an integer".to_string(),
                }),
            _ => Err(self.error_unexpected("an integer")),
        }
    }

    /// Parses the body of a `{ ... }` group: a sequence of triple
    /// patterns, FILTER clauses, OPTIONAL blocks, and nested (possibly
    /// UNION-joined) groups.
    fn parse_group_body(&mut self) -> Result<Vec<GraphPattern>> {
        let mut patterns = Vec::new();
        loop {
            match self.peek() {
                Some(Token::RBrace) | None => break,
                _ => {}
            }
            match self.peek_keyword() {
                Some(Keyword::Filter) => {
                    self.advance();
                    self.eat(Sym::LParen, "'('")?;
                    let expr = self.parse_expression()?;
                    self.eat(Sym::RParen, "')'")?;
                    patterns.push(GraphPattern::Filter(expr));
                    if matches!(self.peek(), Some(Token::Dot)) {
                        self.advance();
                    }
                }
                Some(Keyword::Optional) => {
                    self.advance();
                    self.eat(Sym::LBrace, "'{'")?;
                    let inner = self.parse_group_body()?;
                    self.eat(Sym::RBrace, "'}'")?;
                    patterns.push(GraphPattern::Optional(inner));
                }
                _ => {
                    if matches!(self.peek(), Some(Token::LBrace)) {
                        self.advance();
                        let mut left = self.parse_group_body()?;
                        self.eat(Sym::RBrace, "'}'")?;
                        while self.peek_keyword() == Some(Keyword::Union) {
                            self.advance();
                            self.eat(Sym::LBrace, "'{'")?;
                            let right = self.parse_group_body()?;
                            self.eat(Sym::RBrace, "'}'")?;
                            left = vec![GraphPattern::Union(left, right)];
                        }
                        patterns.extend(left);
                    } else {
                        let subject = self.parse_term_or_var(Position::Subject)?;
                        let predicate = self.parse_term_or_var(Position::Predicate)?;
                        let object = self.parse_term_or_var(Position::Object)?;
                        patterns.push(GraphPattern::Triple(TriplePatternAst {
                            subject,
                            predicate,
                            object,
                        }));
                        if matches!(self.peek(), Some(Token::Dot)) {
                            self.advance();
                        }
                    }
                }
            }
        }
        Ok(patterns)
    }

    fn parse_term_or_var(&mut self, position: Position) -> Result<TermOrVar> {
        match self.peek() {
            Some(Token::Variable(name)) => {
                let v = TermOrVar::Var(Var::new(*name));
                self.advance();
                Ok(v)
            }
            Some(Token::Ident(word)) if position == Position::Predicate && word.eq_ignore_ascii_case("a") => {
                self.advance();
                Ok(TermOrVar::Term(Term::Iri(Iri::new(
                    graphkit_core::vocab::rdf::TYPE,
                )?)))
            }
            Some(Token::IriRef(iri)) => {
                let t = TermOrVar::Term(Term::Iri(Iri::new(*iri)?));
                self.advance();
                Ok(t)
            }
            Some(Token::PrefixedName(name)) => {
                let iri = self.resolve_prefixed(name)?;
                self.advance();
                Ok(TermOrVar::Term(Term::Iri(iri)))
            }
            Some(Token::BlankNodeLabel(label)) => {
                let t = TermOrVar::Term(Term::BlankNode(BlankNode::new(*label)));
                self.advance();
                Ok(t)
            }
            Some(Token::StringLiteral(_)) => {
                let lit = self.parse_literal()?;
                Ok(TermOrVar::Term(Term::Literal(lit)))
            }
            Some(Token::Integer(_)) | Some(Token::Decimal(_)) => {
                let lit = self.parse_numeric_literal()?;
                Ok(TermOrVar::Term(Term::Literal(lit)))
            }
            _ => Err(self.error_unexpected("a variable or term")),
        }
    }

    fn parse_literal(&mut self) -> Result<Literal> {
        let text = match self.advance() {
            Some(Token::StringLiteral(s)) => unescape(s),
            _ => return Err(self.error_unexpected("a string literal")),
        };
        match self.peek() {
            Some(Token::DoubleCaret) => {
                self.advance();
                let datatype = match self.advance() {
                    Some(Token::IriRef(iri)) => Iri::new(iri)?,
                    Some(Token::PrefixedName(name)) => self.resolve_prefixed(name)?,
                    _ => return Err(self.error_unexpected("a datatype IRI")),
                };
                Literal::new(text, Some(datatype), None)
            }
            Some(Token::At) => {
                self.advance();
                let lang = match self.advance() {
                    Some(Token::Ident(tag)) => tag.to_string(),
                    _ => return Err(self.error_unexpected("a language tag")),
                };
                Literal::new(text, None, Some(lang))
            }
            _ => Ok(Literal::plain(text)),
        }
    }

    fn parse_numeric_literal(&mut self) -> Result<Literal> {
        match self.advance() {
            Some(Token::Integer(text)) => {
                Ok(Literal::typed(text, Iri::new(graphkit_core::vocab::xsd::INTEGER)?))
            }
            Some(Token::Decimal(text)) => {
                Ok(Literal::typed(text, Iri::new(graphkit_core::vocab::xsd::DECIMAL)?))
            }
            _ => Err(self.error_unexpected("a number")),
        }
    }

    // --- Filter expressions, lowest to highest precedence ---

    fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expression> {
        let mut terms = vec![self.parse_and()?];
        while matches!(self.peek(), Some(Token::OrOr)) {
            self.advance();
            terms.push(self.parse_and()?);
        }
        Ok(if terms.len() == 1 {
            terms.pop().unwrap()
        } else {
            Expression::Logic(LogicOp::Or, terms)
        })
    }

    fn parse_and(&mut self) -> Result<Expression> {
        let mut terms = vec![self.parse_comparison()?];
        while matches!(self.peek(), Some(Token::AndAnd)) {
            self.advance();
            terms.push(self.parse_comparison()?);
        }
        Ok(if terms.len() == 1 {
            terms.pop().unwrap()
        } else {
            Expression::Logic(LogicOp::And, terms)
        })
    }

    fn parse_comparison(&mut self) -> Result<Expression> {
        let lhs = self.parse_additive()?;
        let op = match self.peek() {
            Some(Token::Eq) => CmpOp::Eq,
            Some(Token::Ne) => CmpOp::Ne,
            Some(Token::Lt) => CmpOp::Lt,
            Some(Token::Le) => CmpOp::Le,
            Some(Token::Gt) => CmpOp::Gt,
            Some(Token::Ge) => CmpOp::Ge,
            _ => return Ok(lhs),
        };
        self.advance();
        let rhs = self.parse_additive()?;
        Ok(Expression::Cmp(op, Box::new(lhs), Box::new(rhs)))
    }

    fn parse_additive(&mut self) -> Result<Expression> {
        let mut lhs = self.parse_multiplicative()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => ArithOp::Add,
                Some(Token::Minus) => ArithOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_multiplicative()?;
            lhs = Expression::Arith(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_multiplicative(&mut self) -> Result<Expression> {
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => ArithOp::Mul,
                Some(Token::Slash) => ArithOp::Div,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_unary()?;
            lhs = Expression::Arith(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expression> {
        if matches!(self.peek(), Some(Token::Bang)) {
            self.advance();
            let inner = self.parse_unary()?;
            return Ok(Expression::Logic(LogicOp::Not, vec![inner]));
        }
        if matches!(self.peek(), Some(Token::Minus) | Some(Token::Plus))
            && matches!(
                self.tokens.get(self.pos + 1),
                Some(Token::Integer(_)) | Some(Token::Decimal(_))
            )
        {
            let negate = matches!(self.peek(), Some(Token::Minus));
            self.advance();
            let lit = self.parse_numeric_literal()?;
            let lit = if negate {
                let datatype = lit.datatype().cloned().expect("numeric literal always has a datatype");
                Literal::typed(format!("-{}", lit.value()), datatype)
            } else {
                lit
            };
            return Ok(Expression::Const(Term::Literal(lit)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expression> {
        match self.peek().cloned() {
            Some(Token::Variable(name)) => {
                self.advance();
                Ok(Expression::Var(Var::new(name)))
            }
            Some(Token::LParen) => {
                self.advance();
                let expr = self.parse_expression()?;
                self.eat(Sym::RParen, "')'")?;
                Ok(expr)
            }
            Some(Token::Ident(name)) if matches!(self.tokens.get(self.pos + 1), Some(Token::LParen)) => {
                self.advance();
                self.advance();
                let mut args = Vec::new();
                if !matches!(self.peek(), Some(Token::RParen)) {
                    args.push(self.parse_expression()?);
                    while matches!(self.peek(), Some(Token::Comma)) {
                        self.advance();
                        args.push(self.parse_expression()?);
                    }
                }
                self.eat(Sym::RParen, "')'")?;
                Ok(Expression::Call(name.to_string(), args))
            }
            Some(Token::StringLiteral(_)) => {
                let lit = self.parse_literal()?;
                Ok(Expression::Const(Term::Literal(lit)))
            }
            Some(Token::Integer(_)) | Some(Token::Decimal(_)) => {
                let lit = self.parse_numeric_literal()?;
                Ok(Expression::Const(Term::Literal(lit)))
            }
            Some(Token::IriRef(iri)) => {
                self.advance();
                Ok(Expression::Const(Term::Iri(Iri::new(iri)?)))
            }
            Some(Token::PrefixedName(name)) => {
                self.advance();
                Ok(Expression::Const(Term::Iri(self.resolve_prefixed(name)?)))
            }
            _ => Err(self.error_unexpected("an expression")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Subject,
    Predicate,
    Object,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sym {
    LBrace,
    RBrace,
    LParen,
    RParen,
    Dot,
    Comma,
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some(other) => out.push(other),
                None => {}
            }
        } else {
            out.push(c);
        }
    }
    out
}
