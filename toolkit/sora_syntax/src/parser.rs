//! Recursive descent parser producing the concrete syntax tree.
//!
//! The grammar accepted here is the closed set the facade layer classifies:
//! the fifteen type shapes, declaration groups, variable/function
//! declarations, and the expression shapes the property walk inspects.
//! Everything else is preserved as token-soup nodes so serialization stays
//! byte-for-byte.

use crate::{lex, ParseError, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Parse a complete type fragment.
///
/// The whole input must be consumed; trailing tokens are an error. This is
/// the re-parse entry point used by canonical-form synthesis.
pub fn parse_type(source: &str) -> Result<SyntaxNode, ParseError> {
    let mut parser = Parser::new(lex(source)?);
    let ty = parser.type_()?;
    parser.expect_eof()?;
    Ok(ty)
}

/// Parse a complete expression fragment.
pub fn parse_expr(source: &str) -> Result<SyntaxNode, ParseError> {
    let mut parser = Parser::new(lex(source)?);
    let expr = parser.expr()?;
    parser.expect_eof()?;
    Ok(expr)
}

/// Parse a source file into a `SourceFile` node of declarations.
pub fn parse_source(source: &str) -> Result<SyntaxNode, ParseError> {
    let mut parser = Parser::new(lex(source)?);
    parser.source_file()
}

struct Parser {
    tokens: Vec<SyntaxToken>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<SyntaxToken>) -> Self {
        Parser { tokens, pos: 0 }
    }

    // === Token navigation ===

    #[inline]
    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    fn nth(&self, n: usize) -> Option<&SyntaxToken> {
        self.tokens.get(self.pos + n)
    }

    #[inline]
    fn peek_kind(&self) -> Option<SyntaxKind> {
        self.nth(0).map(SyntaxToken::kind)
    }

    #[inline]
    fn nth_kind(&self, n: usize) -> Option<SyntaxKind> {
        self.nth(n).map(SyntaxToken::kind)
    }

    #[inline]
    fn at(&self, kind: SyntaxKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    fn at_text(&self, text: &str) -> bool {
        self.nth(0).is_some_and(|t| t.text() == text)
    }

    fn bump(&mut self, expected: &'static str) -> Result<SyntaxToken, ParseError> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(ParseError::UnexpectedEof { expected })?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, kind: SyntaxKind, expected: &'static str) -> Result<SyntaxToken, ParseError> {
        match self.nth(0) {
            Some(token) if token.kind() == kind => self.bump(expected),
            Some(token) => Err(ParseError::Unexpected {
                expected,
                found: token.kind(),
                span: token.span(),
            }),
            None => Err(ParseError::UnexpectedEof { expected }),
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> Option<SyntaxToken> {
        if self.at(kind) {
            let token = self.tokens[self.pos].clone();
            self.pos += 1;
            Some(token)
        } else {
            None
        }
    }

    fn expect_eof(&self) -> Result<(), ParseError> {
        match self.nth(0) {
            None => Ok(()),
            Some(token) => Err(ParseError::TrailingTokens { span: token.span() }),
        }
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.nth(0) {
            Some(token) => ParseError::Unexpected {
                expected,
                found: token.kind(),
                span: token.span(),
            },
            None => ParseError::UnexpectedEof { expected },
        }
    }

    // === Types ===

    fn type_(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut prefix: Vec<SyntaxElement> = Vec::new();
        loop {
            if self.at(SyntaxKind::At) {
                prefix.push(self.attribute()?.into());
            } else if self.at(SyntaxKind::InoutKeyword) {
                prefix.push(self.bump("specifier")?.into());
            } else {
                break;
            }
        }
        let base = self.composition_type()?;
        if prefix.is_empty() {
            Ok(base)
        } else {
            prefix.push(base.into());
            Ok(SyntaxNode::new(SyntaxKind::AttributedType, prefix))
        }
    }

    fn composition_type(&mut self) -> Result<SyntaxNode, ParseError> {
        let first = self.postfix_type()?;
        if !self.at(SyntaxKind::Ampersand) {
            return Ok(first);
        }
        let mut children: Vec<SyntaxElement> = vec![first.into()];
        while let Some(amp) = self.eat(SyntaxKind::Ampersand) {
            children.push(amp.into());
            children.push(self.postfix_type()?.into());
        }
        Ok(SyntaxNode::new(SyntaxKind::CompositionType, children))
    }

    fn postfix_type(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut ty = self.primary_type()?;
        loop {
            match self.peek_kind() {
                Some(SyntaxKind::Question) => {
                    let token = self.bump("?")?;
                    ty = SyntaxNode::new(
                        SyntaxKind::OptionalType,
                        vec![ty.into(), token.into()],
                    );
                }
                Some(SyntaxKind::Bang) => {
                    let token = self.bump("!")?;
                    ty = SyntaxNode::new(
                        SyntaxKind::ImplicitlyUnwrappedOptionalType,
                        vec![ty.into(), token.into()],
                    );
                }
                Some(SyntaxKind::Period) => {
                    let period = self.bump(".")?;
                    let name = self.expect(SyntaxKind::Identifier, "member type name")?;
                    if name.text() == "Type" || name.text() == "Protocol" {
                        ty = SyntaxNode::new(
                            SyntaxKind::MetatypeType,
                            vec![ty.into(), period.into(), name.into()],
                        );
                    } else {
                        let mut children: Vec<SyntaxElement> =
                            vec![ty.into(), period.into(), name.into()];
                        if self.at(SyntaxKind::LeftAngle) {
                            children.push(self.generic_argument_list()?.into());
                        }
                        ty = SyntaxNode::new(SyntaxKind::MemberType, children);
                    }
                }
                _ => break,
            }
        }
        Ok(ty)
    }

    fn primary_type(&mut self) -> Result<SyntaxNode, ParseError> {
        match self.peek_kind() {
            Some(SyntaxKind::SomeKeyword | SyntaxKind::AnyKeyword) => {
                let keyword = self.bump("some/any")?;
                let constraint = self.composition_type()?;
                Ok(SyntaxNode::new(
                    SyntaxKind::SomeOrAnyType,
                    vec![keyword.into(), constraint.into()],
                ))
            }
            Some(SyntaxKind::Tilde) => {
                let tilde = self.bump("~")?;
                let inner = self.postfix_type()?;
                Ok(SyntaxNode::new(
                    SyntaxKind::SuppressedType,
                    vec![tilde.into(), inner.into()],
                ))
            }
            Some(SyntaxKind::RepeatKeyword) => {
                let keyword = self.bump("repeat")?;
                let pattern = self.type_()?;
                Ok(SyntaxNode::new(
                    SyntaxKind::PackExpansionType,
                    vec![keyword.into(), pattern.into()],
                ))
            }
            Some(SyntaxKind::EachKeyword) => {
                let keyword = self.bump("each")?;
                let name = self.expect(SyntaxKind::Identifier, "pack name")?;
                let simple = SyntaxNode::new(SyntaxKind::SimpleType, vec![name.into()]);
                Ok(SyntaxNode::new(
                    SyntaxKind::PackReferenceType,
                    vec![keyword.into(), simple.into()],
                ))
            }
            Some(SyntaxKind::ClassKeyword) => {
                let keyword = self.bump("class")?;
                Ok(SyntaxNode::new(
                    SyntaxKind::ClassRestrictionType,
                    vec![keyword.into()],
                ))
            }
            Some(SyntaxKind::LeftBracket) => self.bracketed_type(),
            Some(SyntaxKind::LeftParen) => self.tuple_or_function_type(),
            Some(SyntaxKind::Identifier) => {
                let name = self.bump("type name")?;
                let mut children: Vec<SyntaxElement> = vec![name.into()];
                if self.at(SyntaxKind::LeftAngle) {
                    children.push(self.generic_argument_list()?.into());
                }
                Ok(SyntaxNode::new(SyntaxKind::SimpleType, children))
            }
            _ => Err(self.unexpected("a type")),
        }
    }

    fn bracketed_type(&mut self) -> Result<SyntaxNode, ParseError> {
        let lbracket = self.expect(SyntaxKind::LeftBracket, "[")?;
        let first = self.type_()?;
        if let Some(colon) = self.eat(SyntaxKind::Colon) {
            let value = self.type_()?;
            let rbracket = self.expect(SyntaxKind::RightBracket, "]")?;
            Ok(SyntaxNode::new(
                SyntaxKind::DictionaryType,
                vec![
                    lbracket.into(),
                    first.into(),
                    colon.into(),
                    value.into(),
                    rbracket.into(),
                ],
            ))
        } else {
            let rbracket = self.expect(SyntaxKind::RightBracket, "]")?;
            Ok(SyntaxNode::new(
                SyntaxKind::ArrayType,
                vec![lbracket.into(), first.into(), rbracket.into()],
            ))
        }
    }

    fn tuple_or_function_type(&mut self) -> Result<SyntaxNode, ParseError> {
        let lparen = self.expect(SyntaxKind::LeftParen, "(")?;
        let mut inner: Vec<SyntaxElement> = Vec::new();
        while !self.at(SyntaxKind::RightParen) {
            inner.push(self.tuple_type_element()?.into());
            match self.eat(SyntaxKind::Comma) {
                Some(comma) => inner.push(comma.into()),
                None => break,
            }
        }
        let rparen = self.expect(SyntaxKind::RightParen, ")")?;

        let is_function = matches!(
            self.peek_kind(),
            Some(
                SyntaxKind::Arrow
                    | SyntaxKind::AsyncKeyword
                    | SyntaxKind::ThrowsKeyword
                    | SyntaxKind::RethrowsKeyword
            )
        );
        if !is_function {
            let mut children: Vec<SyntaxElement> = vec![lparen.into()];
            children.extend(inner);
            children.push(rparen.into());
            return Ok(SyntaxNode::new(SyntaxKind::TupleType, children));
        }

        let mut params: Vec<SyntaxElement> = vec![lparen.into()];
        params.extend(inner);
        params.push(rparen.into());
        let param_list = SyntaxNode::new(SyntaxKind::FunctionTypeParameterList, params);

        let mut children: Vec<SyntaxElement> = vec![param_list.into()];
        if let Some(effects) = self.effect_specifiers() {
            children.push(effects.into());
        }
        let arrow = self.expect(SyntaxKind::Arrow, "->")?;
        children.push(arrow.into());
        children.push(self.type_()?.into());
        Ok(SyntaxNode::new(SyntaxKind::FunctionType, children))
    }

    fn tuple_type_element(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children: Vec<SyntaxElement> = Vec::new();
        let labeled = matches!(
            self.peek_kind(),
            Some(SyntaxKind::Identifier | SyntaxKind::Underscore)
        ) && self.nth_kind(1) == Some(SyntaxKind::Colon);
        if labeled {
            children.push(self.bump("element label")?.into());
            children.push(self.bump(":")?.into());
        }
        children.push(self.type_()?.into());
        if let Some(ellipsis) = self.eat(SyntaxKind::Ellipsis) {
            children.push(ellipsis.into());
        }
        Ok(SyntaxNode::new(SyntaxKind::TupleTypeElement, children))
    }

    fn generic_argument_list(&mut self) -> Result<SyntaxNode, ParseError> {
        let langle = self.expect(SyntaxKind::LeftAngle, "<")?;
        let mut children: Vec<SyntaxElement> = vec![langle.into()];
        while !self.at(SyntaxKind::RightAngle) {
            let argument = self.type_()?;
            children.push(SyntaxNode::new(SyntaxKind::GenericArgument, vec![argument.into()]).into());
            match self.eat(SyntaxKind::Comma) {
                Some(comma) => children.push(comma.into()),
                None => break,
            }
        }
        let rangle = self.expect(SyntaxKind::RightAngle, ">")?;
        children.push(rangle.into());
        Ok(SyntaxNode::new(SyntaxKind::GenericArgumentList, children))
    }

    /// A type where one is required by the grammar, or a `MissingType`
    /// placeholder when the next token cannot start one.
    fn type_or_missing(&mut self) -> Result<SyntaxNode, ParseError> {
        let can_start = matches!(
            self.peek_kind(),
            Some(
                SyntaxKind::At
                    | SyntaxKind::InoutKeyword
                    | SyntaxKind::SomeKeyword
                    | SyntaxKind::AnyKeyword
                    | SyntaxKind::Tilde
                    | SyntaxKind::RepeatKeyword
                    | SyntaxKind::EachKeyword
                    | SyntaxKind::ClassKeyword
                    | SyntaxKind::LeftBracket
                    | SyntaxKind::LeftParen
                    | SyntaxKind::Identifier
            )
        );
        if can_start {
            self.type_()
        } else {
            Ok(SyntaxNode::new(SyntaxKind::MissingType, Vec::new()))
        }
    }

    // === Expressions ===

    fn expr(&mut self) -> Result<SyntaxNode, ParseError> {
        if self.at(SyntaxKind::Minus) {
            let minus = self.bump("-")?;
            let inner = self.expr()?;
            return Ok(SyntaxNode::new(
                SyntaxKind::PrefixOpExpr,
                vec![minus.into(), inner.into()],
            ));
        }
        self.postfix_expr()
    }

    fn postfix_expr(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut expr = self.primary_expr()?;
        loop {
            match self.peek_kind() {
                Some(SyntaxKind::Period) => {
                    let period = self.bump(".")?;
                    let name = self.expect(SyntaxKind::Identifier, "member name")?;
                    expr = SyntaxNode::new(
                        SyntaxKind::MemberAccessExpr,
                        vec![expr.into(), period.into(), name.into()],
                    );
                }
                Some(SyntaxKind::LeftParen) => {
                    let mut children: Vec<SyntaxElement> = vec![expr.into()];
                    children.push(self.bump("(")?.into());
                    while !self.at(SyntaxKind::RightParen) {
                        children.push(self.call_argument()?.into());
                        match self.eat(SyntaxKind::Comma) {
                            Some(comma) => children.push(comma.into()),
                            None => break,
                        }
                    }
                    children.push(self.expect(SyntaxKind::RightParen, ")")?.into());
                    expr = SyntaxNode::new(SyntaxKind::CallExpr, children);
                }
                _ => break,
            }
        }
        Ok(expr)
    }

    fn call_argument(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children: Vec<SyntaxElement> = Vec::new();
        let labeled = self.at(SyntaxKind::Identifier) && self.nth_kind(1) == Some(SyntaxKind::Colon);
        if labeled {
            children.push(self.bump("argument label")?.into());
            children.push(self.bump(":")?.into());
        }
        children.push(self.expr()?.into());
        Ok(SyntaxNode::new(SyntaxKind::CallArgument, children))
    }

    fn primary_expr(&mut self) -> Result<SyntaxNode, ParseError> {
        let wrap = |kind: SyntaxKind, token: SyntaxToken| {
            SyntaxNode::new(kind, vec![token.into()])
        };
        match self.peek_kind() {
            Some(SyntaxKind::IntegerLiteral) => {
                Ok(wrap(SyntaxKind::IntegerLiteralExpr, self.bump("literal")?))
            }
            Some(SyntaxKind::FloatLiteral) => {
                Ok(wrap(SyntaxKind::FloatLiteralExpr, self.bump("literal")?))
            }
            Some(SyntaxKind::StringLiteral) => {
                Ok(wrap(SyntaxKind::StringLiteralExpr, self.bump("literal")?))
            }
            Some(SyntaxKind::RegexLiteral) => {
                Ok(wrap(SyntaxKind::RegexLiteralExpr, self.bump("literal")?))
            }
            Some(SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword) => {
                Ok(wrap(SyntaxKind::BooleanLiteralExpr, self.bump("literal")?))
            }
            Some(SyntaxKind::NilKeyword) => {
                Ok(wrap(SyntaxKind::NilLiteralExpr, self.bump("nil")?))
            }
            Some(SyntaxKind::Identifier) => {
                Ok(wrap(SyntaxKind::IdentifierExpr, self.bump("identifier")?))
            }
            Some(SyntaxKind::LeftBracket) => self.array_expr(),
            Some(SyntaxKind::LeftParen) => self.tuple_expr(),
            _ => Err(self.unexpected("an expression")),
        }
    }

    fn array_expr(&mut self) -> Result<SyntaxNode, ParseError> {
        // Dictionary literals are preserved as soup; scan ahead for a
        // top-level colon to decide.
        if self.bracketed_has_top_level_colon() {
            return self.soup_expr();
        }
        let mut children: Vec<SyntaxElement> = vec![self.expect(SyntaxKind::LeftBracket, "[")?.into()];
        while !self.at(SyntaxKind::RightBracket) {
            let element = self.expr()?;
            children.push(SyntaxNode::new(SyntaxKind::ArrayElement, vec![element.into()]).into());
            match self.eat(SyntaxKind::Comma) {
                Some(comma) => children.push(comma.into()),
                None => break,
            }
        }
        children.push(self.expect(SyntaxKind::RightBracket, "]")?.into());
        Ok(SyntaxNode::new(SyntaxKind::ArrayExpr, children))
    }

    fn bracketed_has_top_level_colon(&self) -> bool {
        let mut depth = 0usize;
        let mut n = 0usize;
        while let Some(kind) = self.nth_kind(n) {
            match kind {
                SyntaxKind::LeftBracket | SyntaxKind::LeftParen | SyntaxKind::LeftBrace => {
                    depth += 1;
                }
                SyntaxKind::RightBracket | SyntaxKind::RightParen | SyntaxKind::RightBrace => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return false;
                    }
                }
                SyntaxKind::Colon if depth == 1 => return true,
                _ => {}
            }
            n += 1;
        }
        false
    }

    fn tuple_expr(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children: Vec<SyntaxElement> = vec![self.expect(SyntaxKind::LeftParen, "(")?.into()];
        while !self.at(SyntaxKind::RightParen) {
            let mut element: Vec<SyntaxElement> = Vec::new();
            let labeled =
                self.at(SyntaxKind::Identifier) && self.nth_kind(1) == Some(SyntaxKind::Colon);
            if labeled {
                element.push(self.bump("element label")?.into());
                element.push(self.bump(":")?.into());
            }
            element.push(self.expr()?.into());
            children.push(SyntaxNode::new(SyntaxKind::TupleExprElement, element).into());
            match self.eat(SyntaxKind::Comma) {
                Some(comma) => children.push(comma.into()),
                None => break,
            }
        }
        children.push(self.expect(SyntaxKind::RightParen, ")")?.into());
        Ok(SyntaxNode::new(SyntaxKind::TupleExpr, children))
    }

    /// An initializer expression: structured where possible, token soup
    /// when the expression continues with operators the toolkit does not
    /// model. Soup keeps the bytes intact for passthrough.
    fn initializer_expr(&mut self) -> Result<SyntaxNode, ParseError> {
        let start = self.pos;
        match self.expr() {
            Ok(expr) if !self.continues_with_operator() => Ok(expr),
            _ => {
                self.pos = start;
                self.soup_expr()
            }
        }
    }

    fn continues_with_operator(&self) -> bool {
        matches!(
            self.peek_kind(),
            Some(
                SyntaxKind::UnknownToken
                    | SyntaxKind::Question
                    | SyntaxKind::Bang
                    | SyntaxKind::Ampersand
                    | SyntaxKind::LeftAngle
                    | SyntaxKind::RightAngle
                    | SyntaxKind::Minus
            )
        )
    }

    /// Collect one expression's worth of tokens as an `UnknownExpr`.
    ///
    /// Stops at a top-level comma, a closing delimiter, a token that starts
    /// on a fresh line, or end of input.
    fn soup_expr(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children: Vec<SyntaxElement> = Vec::new();
        let mut depth = 0usize;
        while let Some(token) = self.nth(0) {
            let kind = token.kind();
            if depth == 0 {
                let boundary = matches!(
                    kind,
                    SyntaxKind::Comma
                        | SyntaxKind::RightParen
                        | SyntaxKind::RightBracket
                        | SyntaxKind::RightBrace
                        | SyntaxKind::Semicolon
                ) || (!children.is_empty() && token.leading_trivia().has_newline());
                if boundary {
                    break;
                }
            }
            match kind {
                SyntaxKind::LeftParen | SyntaxKind::LeftBracket | SyntaxKind::LeftBrace => {
                    depth += 1;
                }
                SyntaxKind::RightParen | SyntaxKind::RightBracket | SyntaxKind::RightBrace => {
                    depth = depth.saturating_sub(1);
                }
                _ => {}
            }
            children.push(self.bump("expression")?.into());
        }
        if children.is_empty() {
            return Err(self.unexpected("an expression"));
        }
        Ok(SyntaxNode::new(SyntaxKind::UnknownExpr, children))
    }

    // === Declarations ===

    fn source_file(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children: Vec<SyntaxElement> = Vec::new();
        while !self.at_end() {
            if let Some(semi) = self.eat(SyntaxKind::Semicolon) {
                children.push(semi.into());
                continue;
            }
            children.push(self.decl()?.into());
        }
        Ok(SyntaxNode::new(SyntaxKind::SourceFile, children))
    }

    fn decl(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children: Vec<SyntaxElement> = Vec::new();
        if self.at(SyntaxKind::PoundIf) {
            return self.if_config_decl();
        }
        if self.at(SyntaxKind::At) {
            children.push(self.attribute_list()?.into());
        }
        if let Some(modifiers) = self.modifier_list() {
            children.push(modifiers.into());
        }
        match self.peek_kind() {
            Some(
                SyntaxKind::StructKeyword
                | SyntaxKind::ClassKeyword
                | SyntaxKind::EnumKeyword
                | SyntaxKind::ActorKeyword
                | SyntaxKind::ProtocolKeyword,
            ) => self.group_decl(children),
            Some(SyntaxKind::ExtensionKeyword) => self.extension_decl(children),
            Some(SyntaxKind::VarKeyword | SyntaxKind::LetKeyword) => self.variable_decl(children),
            Some(SyntaxKind::FuncKeyword) => self.function_decl(children),
            Some(SyntaxKind::CaseKeyword) => self.line_decl(SyntaxKind::EnumCaseDecl, children),
            Some(SyntaxKind::ImportKeyword) => self.line_decl(SyntaxKind::ImportDecl, children),
            _ => self.unknown_decl(children),
        }
    }

    fn group_decl(&mut self, mut children: Vec<SyntaxElement>) -> Result<SyntaxNode, ParseError> {
        let keyword = self.bump("declaration keyword")?;
        let node_kind = match keyword.kind() {
            SyntaxKind::StructKeyword => SyntaxKind::StructDecl,
            SyntaxKind::ClassKeyword => SyntaxKind::ClassDecl,
            SyntaxKind::EnumKeyword => SyntaxKind::EnumDecl,
            SyntaxKind::ActorKeyword => SyntaxKind::ActorDecl,
            _ => SyntaxKind::ProtocolDecl,
        };
        children.push(keyword.into());
        children.push(self.expect(SyntaxKind::Identifier, "declaration name")?.into());
        if self.at(SyntaxKind::LeftAngle) {
            children.push(self.generic_parameter_clause()?.into());
        }
        if self.at(SyntaxKind::Colon) {
            children.push(self.inheritance_clause()?.into());
        }
        self.where_clause_soup(&mut children)?;
        children.push(self.member_block()?.into());
        Ok(SyntaxNode::new(node_kind, children))
    }

    fn extension_decl(&mut self, mut children: Vec<SyntaxElement>) -> Result<SyntaxNode, ParseError> {
        children.push(self.expect(SyntaxKind::ExtensionKeyword, "extension")?.into());
        children.push(self.type_()?.into());
        if self.at(SyntaxKind::Colon) {
            children.push(self.inheritance_clause()?.into());
        }
        self.where_clause_soup(&mut children)?;
        children.push(self.member_block()?.into());
        Ok(SyntaxNode::new(SyntaxKind::ExtensionDecl, children))
    }

    fn inheritance_clause(&mut self) -> Result<SyntaxNode, ParseError> {
        let colon = self.expect(SyntaxKind::Colon, ":")?;
        let mut children: Vec<SyntaxElement> = vec![colon.into()];
        loop {
            let ty = self.type_()?;
            children.push(SyntaxNode::new(SyntaxKind::InheritedType, vec![ty.into()]).into());
            match self.eat(SyntaxKind::Comma) {
                Some(comma) => children.push(comma.into()),
                None => break,
            }
        }
        Ok(SyntaxNode::new(SyntaxKind::InheritanceClause, children))
    }

    fn member_block(&mut self) -> Result<SyntaxNode, ParseError> {
        let lbrace = self.expect(SyntaxKind::LeftBrace, "{")?;
        let mut children: Vec<SyntaxElement> = vec![lbrace.into()];
        while !self.at(SyntaxKind::RightBrace) {
            if self.at_end() {
                return Err(ParseError::UnexpectedEof { expected: "}" });
            }
            if let Some(semi) = self.eat(SyntaxKind::Semicolon) {
                children.push(semi.into());
                continue;
            }
            children.push(self.decl()?.into());
        }
        children.push(self.expect(SyntaxKind::RightBrace, "}")?.into());
        Ok(SyntaxNode::new(SyntaxKind::MemberBlock, children))
    }

    fn variable_decl(&mut self, mut children: Vec<SyntaxElement>) -> Result<SyntaxNode, ParseError> {
        children.push(self.bump("var/let")?.into());
        loop {
            children.push(self.pattern_binding()?.into());
            match self.eat(SyntaxKind::Comma) {
                Some(comma) => children.push(comma.into()),
                None => break,
            }
        }
        Ok(SyntaxNode::new(SyntaxKind::VariableDecl, children))
    }

    fn pattern_binding(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children: Vec<SyntaxElement> = vec![self.pattern()?.into()];
        if let Some(colon) = self.eat(SyntaxKind::Colon) {
            let ty = self.type_or_missing()?;
            children.push(
                SyntaxNode::new(SyntaxKind::TypeAnnotation, vec![colon.into(), ty.into()]).into(),
            );
        }
        if let Some(equals) = self.eat(SyntaxKind::Equals) {
            let value = self.initializer_expr()?;
            children.push(
                SyntaxNode::new(
                    SyntaxKind::InitializerClause,
                    vec![equals.into(), value.into()],
                )
                .into(),
            );
        }
        if self.at(SyntaxKind::LeftBrace) {
            children.push(self.accessor_block()?.into());
        }
        Ok(SyntaxNode::new(SyntaxKind::PatternBinding, children))
    }

    fn pattern(&mut self) -> Result<SyntaxNode, ParseError> {
        match self.peek_kind() {
            Some(SyntaxKind::Identifier) => {
                let name = self.bump("pattern")?;
                Ok(SyntaxNode::new(SyntaxKind::IdentifierPattern, vec![name.into()]))
            }
            Some(SyntaxKind::Underscore) => {
                let token = self.bump("pattern")?;
                Ok(SyntaxNode::new(SyntaxKind::WildcardPattern, vec![token.into()]))
            }
            Some(SyntaxKind::LeftParen) => {
                let mut children: Vec<SyntaxElement> =
                    vec![self.expect(SyntaxKind::LeftParen, "(")?.into()];
                while !self.at(SyntaxKind::RightParen) {
                    let element = self.pattern()?;
                    children.push(
                        SyntaxNode::new(SyntaxKind::TuplePatternElement, vec![element.into()])
                            .into(),
                    );
                    match self.eat(SyntaxKind::Comma) {
                        Some(comma) => children.push(comma.into()),
                        None => break,
                    }
                }
                children.push(self.expect(SyntaxKind::RightParen, ")")?.into());
                Ok(SyntaxNode::new(SyntaxKind::TuplePattern, children))
            }
            _ => Err(self.unexpected("a binding pattern")),
        }
    }

    fn accessor_block(&mut self) -> Result<SyntaxNode, ParseError> {
        let lbrace = self.expect(SyntaxKind::LeftBrace, "{")?;
        let mut children: Vec<SyntaxElement> = vec![lbrace.into()];
        if self.at_accessor_intro() {
            while !self.at(SyntaxKind::RightBrace) {
                if self.at_end() {
                    return Err(ParseError::UnexpectedEof { expected: "}" });
                }
                children.push(self.accessor_decl()?.into());
            }
        } else {
            // Implicit getter: the block body is one accessor's statement soup.
            let mut body: Vec<SyntaxElement> = Vec::new();
            self.balanced_until_rbrace(&mut body)?;
            children.push(SyntaxNode::new(SyntaxKind::AccessorDecl, body).into());
        }
        children.push(self.expect(SyntaxKind::RightBrace, "}")?.into());
        Ok(SyntaxNode::new(SyntaxKind::AccessorBlock, children))
    }

    fn at_accessor_intro(&self) -> bool {
        // Accessor keywords are contextual; attributes may precede them.
        let mut n = 0usize;
        while self.nth_kind(n) == Some(SyntaxKind::At) {
            n += 2; // @ + name; attribute arguments are not used on accessors
        }
        self.nth(n).is_some_and(|t| {
            t.kind() == SyntaxKind::Identifier
                && matches!(t.text(), "get" | "set" | "willSet" | "didSet")
        })
    }

    fn accessor_decl(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children: Vec<SyntaxElement> = Vec::new();
        while self.at(SyntaxKind::At) {
            children.push(self.attribute()?.into());
        }
        children.push(self.expect(SyntaxKind::Identifier, "accessor keyword")?.into());
        if let Some(lparen) = self.eat(SyntaxKind::LeftParen) {
            children.push(lparen.into());
            children.push(self.expect(SyntaxKind::Identifier, "accessor parameter")?.into());
            children.push(self.expect(SyntaxKind::RightParen, ")")?.into());
        }
        while matches!(
            self.peek_kind(),
            Some(SyntaxKind::AsyncKeyword | SyntaxKind::ThrowsKeyword)
        ) {
            children.push(self.bump("effect")?.into());
        }
        if self.at(SyntaxKind::LeftBrace) {
            children.push(self.code_block()?.into());
        }
        Ok(SyntaxNode::new(SyntaxKind::AccessorDecl, children))
    }

    fn function_decl(&mut self, mut children: Vec<SyntaxElement>) -> Result<SyntaxNode, ParseError> {
        children.push(self.expect(SyntaxKind::FuncKeyword, "func")?.into());
        children.push(self.expect(SyntaxKind::Identifier, "function name")?.into());
        if self.at(SyntaxKind::LeftAngle) {
            children.push(self.generic_parameter_clause()?.into());
        }
        children.push(self.parameter_clause()?.into());
        if let Some(effects) = self.effect_specifiers() {
            children.push(effects.into());
        }
        if let Some(arrow) = self.eat(SyntaxKind::Arrow) {
            let ty = self.type_()?;
            children.push(
                SyntaxNode::new(SyntaxKind::ReturnClause, vec![arrow.into(), ty.into()]).into(),
            );
        }
        self.where_clause_soup(&mut children)?;
        if self.at(SyntaxKind::LeftBrace) {
            children.push(self.code_block()?.into());
        }
        Ok(SyntaxNode::new(SyntaxKind::FunctionDecl, children))
    }

    fn parameter_clause(&mut self) -> Result<SyntaxNode, ParseError> {
        let lparen = self.expect(SyntaxKind::LeftParen, "(")?;
        let mut children: Vec<SyntaxElement> = vec![lparen.into()];
        while !self.at(SyntaxKind::RightParen) {
            children.push(self.function_parameter()?.into());
            match self.eat(SyntaxKind::Comma) {
                Some(comma) => children.push(comma.into()),
                None => break,
            }
        }
        children.push(self.expect(SyntaxKind::RightParen, ")")?.into());
        Ok(SyntaxNode::new(SyntaxKind::ParameterClause, children))
    }

    fn function_parameter(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children: Vec<SyntaxElement> = Vec::new();
        children.push(self.bump("parameter name")?.into());
        if matches!(
            self.peek_kind(),
            Some(SyntaxKind::Identifier | SyntaxKind::Underscore)
        ) {
            children.push(self.bump("parameter name")?.into());
        }
        children.push(self.expect(SyntaxKind::Colon, ":")?.into());
        children.push(self.type_()?.into());
        if let Some(ellipsis) = self.eat(SyntaxKind::Ellipsis) {
            children.push(ellipsis.into());
        }
        if let Some(equals) = self.eat(SyntaxKind::Equals) {
            let value = self.initializer_expr()?;
            children.push(
                SyntaxNode::new(
                    SyntaxKind::InitializerClause,
                    vec![equals.into(), value.into()],
                )
                .into(),
            );
        }
        Ok(SyntaxNode::new(SyntaxKind::FunctionParameter, children))
    }

    fn effect_specifiers(&mut self) -> Option<SyntaxNode> {
        let mut children: Vec<SyntaxElement> = Vec::new();
        if let Some(token) = self.eat(SyntaxKind::AsyncKeyword) {
            children.push(token.into());
        }
        if let Some(token) = self
            .eat(SyntaxKind::ThrowsKeyword)
            .or_else(|| self.eat(SyntaxKind::RethrowsKeyword))
        {
            children.push(token.into());
        }
        if children.is_empty() {
            None
        } else {
            Some(SyntaxNode::new(SyntaxKind::EffectSpecifiers, children))
        }
    }

    fn code_block(&mut self) -> Result<SyntaxNode, ParseError> {
        let lbrace = self.expect(SyntaxKind::LeftBrace, "{")?;
        let mut children: Vec<SyntaxElement> = vec![lbrace.into()];
        self.balanced_until_rbrace(&mut children)?;
        children.push(self.expect(SyntaxKind::RightBrace, "}")?.into());
        Ok(SyntaxNode::new(SyntaxKind::CodeBlock, children))
    }

    /// Collect tokens until the brace closing the current block, leaving the
    /// closing brace unconsumed. Nested braces are tracked.
    fn balanced_until_rbrace(&mut self, out: &mut Vec<SyntaxElement>) -> Result<(), ParseError> {
        let mut depth = 0usize;
        loop {
            match self.peek_kind() {
                None => return Err(ParseError::UnexpectedEof { expected: "}" }),
                Some(SyntaxKind::LeftBrace) => {
                    depth += 1;
                    out.push(self.bump("{")?.into());
                }
                Some(SyntaxKind::RightBrace) => {
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                    out.push(self.bump("}")?.into());
                }
                Some(_) => out.push(self.bump("token")?.into()),
            }
        }
    }

    fn line_decl(
        &mut self,
        kind: SyntaxKind,
        mut children: Vec<SyntaxElement>,
    ) -> Result<SyntaxNode, ParseError> {
        children.push(self.bump("keyword")?.into());
        self.soup_until_line_end(&mut children)?;
        Ok(SyntaxNode::new(kind, children))
    }

    fn unknown_decl(&mut self, mut children: Vec<SyntaxElement>) -> Result<SyntaxNode, ParseError> {
        if self.at_end() && children.is_empty() {
            return Err(ParseError::UnexpectedEof {
                expected: "a declaration",
            });
        }
        self.soup_until_line_end(&mut children)?;
        if children.is_empty() {
            return Err(self.unexpected("a declaration"));
        }
        Ok(SyntaxNode::new(SyntaxKind::UnknownDecl, children))
    }

    /// Collect tokens until a fresh line, a semicolon, or the closing brace
    /// of the enclosing block, balancing nested delimiters (so a trailing
    /// `{ ... }` body stays part of this declaration).
    fn soup_until_line_end(&mut self, out: &mut Vec<SyntaxElement>) -> Result<(), ParseError> {
        let mut depth = 0usize;
        while let Some(token) = self.nth(0) {
            let kind = token.kind();
            if depth == 0 {
                if kind == SyntaxKind::RightBrace || kind == SyntaxKind::Semicolon {
                    break;
                }
                if !out.is_empty() && token.leading_trivia().has_newline() {
                    break;
                }
            }
            match kind {
                SyntaxKind::LeftParen | SyntaxKind::LeftBracket | SyntaxKind::LeftBrace => {
                    depth += 1;
                }
                SyntaxKind::RightParen | SyntaxKind::RightBracket | SyntaxKind::RightBrace => {
                    depth = depth.saturating_sub(1);
                }
                _ => {}
            }
            out.push(self.bump("token")?.into());
        }
        Ok(())
    }

    fn where_clause_soup(&mut self, out: &mut Vec<SyntaxElement>) -> Result<(), ParseError> {
        if !self.at(SyntaxKind::WhereKeyword) {
            return Ok(());
        }
        while let Some(token) = self.nth(0) {
            if token.kind() == SyntaxKind::LeftBrace {
                break;
            }
            out.push(self.bump("where clause")?.into());
        }
        Ok(())
    }

    fn generic_parameter_clause(&mut self) -> Result<SyntaxNode, ParseError> {
        let langle = self.expect(SyntaxKind::LeftAngle, "<")?;
        let mut children: Vec<SyntaxElement> = vec![langle.into()];
        let mut depth = 0usize;
        loop {
            match self.peek_kind() {
                None => return Err(ParseError::UnexpectedEof { expected: ">" }),
                Some(SyntaxKind::LeftAngle) => {
                    depth += 1;
                    children.push(self.bump("<")?.into());
                }
                Some(SyntaxKind::RightAngle) => {
                    let token = self.bump(">")?;
                    children.push(token.into());
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                Some(_) => children.push(self.bump("generic parameter")?.into()),
            }
        }
        Ok(SyntaxNode::new(SyntaxKind::GenericParameterClause, children))
    }

    // === Attributes & modifiers ===

    fn attribute_list(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children: Vec<SyntaxElement> = Vec::new();
        loop {
            if self.at(SyntaxKind::At) {
                children.push(self.attribute()?.into());
            } else if self.at(SyntaxKind::PoundIf) && !children.is_empty() {
                children.push(self.if_config_decl()?.into());
            } else {
                break;
            }
        }
        Ok(SyntaxNode::new(SyntaxKind::AttributeList, children))
    }

    fn attribute(&mut self) -> Result<SyntaxNode, ParseError> {
        let at = self.expect(SyntaxKind::At, "@")?;
        let name = self.expect(SyntaxKind::Identifier, "attribute name")?;
        // Arguments only when the paren hugs the name (no trivia between).
        let hugs = self.at(SyntaxKind::LeftParen)
            && name.trailing_trivia().is_empty()
            && self.nth(0).is_some_and(|t| t.leading_trivia().is_empty());
        let mut children: Vec<SyntaxElement> = vec![at.into(), name.into()];
        if hugs {
            children.push(self.bump("(")?.into());
            let mut depth = 0usize;
            loop {
                match self.peek_kind() {
                    None => return Err(ParseError::UnexpectedEof { expected: ")" }),
                    Some(SyntaxKind::LeftParen) => {
                        depth += 1;
                        children.push(self.bump("(")?.into());
                    }
                    Some(SyntaxKind::RightParen) => {
                        let token = self.bump(")")?;
                        children.push(token.into());
                        if depth == 0 {
                            break;
                        }
                        depth -= 1;
                    }
                    Some(_) => children.push(self.bump("attribute argument")?.into()),
                }
            }
        }
        Ok(SyntaxNode::new(SyntaxKind::Attribute, children))
    }

    fn if_config_decl(&mut self) -> Result<SyntaxNode, ParseError> {
        let pound_if = self.expect(SyntaxKind::PoundIf, "#if")?;
        let mut children: Vec<SyntaxElement> = vec![pound_if.into()];
        let mut depth = 0usize;
        loop {
            match self.peek_kind() {
                None => return Err(ParseError::UnexpectedEof { expected: "#endif" }),
                Some(SyntaxKind::PoundIf) => {
                    depth += 1;
                    children.push(self.bump("#if")?.into());
                }
                Some(SyntaxKind::PoundEndif) => {
                    let token = self.bump("#endif")?;
                    children.push(token.into());
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                Some(_) => children.push(self.bump("conditional block")?.into()),
            }
        }
        Ok(SyntaxNode::new(SyntaxKind::IfConfigDecl, children))
    }

    fn modifier_list(&mut self) -> Option<SyntaxNode> {
        let mut children: Vec<SyntaxElement> = Vec::new();
        loop {
            let Some(kind) = self.peek_kind() else { break };
            let is_modifier = kind.is_access_modifier()
                || matches!(kind, SyntaxKind::StaticKeyword | SyntaxKind::FinalKeyword)
                // `class` is a modifier only before another member keyword.
                || (kind == SyntaxKind::ClassKeyword
                    && matches!(
                        self.nth_kind(1),
                        Some(
                            SyntaxKind::FuncKeyword
                                | SyntaxKind::VarKeyword
                                | SyntaxKind::LetKeyword
                        )
                    ));
            if !is_modifier {
                break;
            }
            let mut modifier: Vec<SyntaxElement> = Vec::new();
            if let Some(token) = self.eat(kind) {
                modifier.push(token.into());
            }
            // `private(set)`-style detail.
            if self.at(SyntaxKind::LeftParen) {
                if let Some(lparen) = self.eat(SyntaxKind::LeftParen) {
                    modifier.push(lparen.into());
                }
                if let Some(detail) = self.eat(SyntaxKind::Identifier) {
                    modifier.push(detail.into());
                }
                if let Some(rparen) = self.eat(SyntaxKind::RightParen) {
                    modifier.push(rparen.into());
                }
            }
            children.extend(modifier);
        }
        if children.is_empty() {
            None
        } else {
            Some(SyntaxNode::new(SyntaxKind::ModifierList, children))
        }
    }
}

#[cfg(test)]
mod tests;
