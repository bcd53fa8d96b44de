//! The closed kind tag shared by tokens and nodes.
//!
//! One enum covers both token kinds (produced by the lexer) and node kinds
//! (produced by the parser). The facade layer dispatches on this tag; every
//! shape the toolkit accepts appears here, and unknown syntax is preserved
//! under the `Unknown*` soup kinds.

/// Kind tag for tokens and nodes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SyntaxKind {
    // === Literal tokens ===
    /// Integer literal: `42`, `0xFF`, `1_000`
    IntegerLiteral,
    /// Float literal: `3.14`, `1e9`, `0x1.8p3`
    FloatLiteral,
    /// String literal, delimiters included: `"hi"`, `#"raw \#(x)"#`
    StringLiteral,
    /// Regex literal: `/[a-z]+/`
    RegexLiteral,

    /// Identifier
    Identifier,

    // === Keyword tokens ===
    StructKeyword,
    ClassKeyword,
    EnumKeyword,
    ActorKeyword,
    ExtensionKeyword,
    ProtocolKeyword,
    FuncKeyword,
    VarKeyword,
    LetKeyword,
    CaseKeyword,
    ImportKeyword,
    SomeKeyword,
    AnyKeyword,
    EachKeyword,
    RepeatKeyword,
    TrueKeyword,
    FalseKeyword,
    NilKeyword,
    AsyncKeyword,
    ThrowsKeyword,
    RethrowsKeyword,
    InoutKeyword,
    StaticKeyword,
    PublicKeyword,
    PrivateKeyword,
    InternalKeyword,
    FileprivateKeyword,
    PackageKeyword,
    OpenKeyword,
    FinalKeyword,
    WhereKeyword,

    // === Punctuation tokens ===
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    LeftAngle,
    RightAngle,
    Comma,
    Colon,
    Semicolon,
    Period,
    Ellipsis,
    Question,
    Bang,
    Arrow,
    At,
    Ampersand,
    Tilde,
    Equals,
    Minus,
    Underscore,
    PoundIf,
    PoundElseif,
    PoundElse,
    PoundEndif,
    /// Any other operator or punctuation character sequence.
    UnknownToken,

    // === Type nodes ===
    /// `@attr inout T` — attribute/specifier wrapper around a base type.
    AttributedType,
    /// `[T]`
    ArrayType,
    /// `class` in type position.
    ClassRestrictionType,
    /// `A & B`
    CompositionType,
    /// `some T` / `any T`
    SomeOrAnyType,
    /// `[K: V]`
    DictionaryType,
    /// `(A, B) -> R`
    FunctionType,
    /// Parenthesized parameter list of a function type.
    FunctionTypeParameterList,
    /// `T!`
    ImplicitlyUnwrappedOptionalType,
    /// `Base.Name`
    MemberType,
    /// `Base.Type` / `Base.Protocol`
    MetatypeType,
    /// Placeholder for recovered-from-error syntax.
    MissingType,
    /// `T?`
    OptionalType,
    /// `repeat T`
    PackExpansionType,
    /// `each T`
    PackReferenceType,
    /// `Name` / `Name<A, B>`
    SimpleType,
    /// `~T`
    SuppressedType,
    /// `(A, B)`
    TupleType,
    /// One element of a tuple type or function parameter list.
    TupleTypeElement,
    /// `<A, B>` attached to a simple or member type.
    GenericArgumentList,
    GenericArgument,

    // === Declaration nodes ===
    SourceFile,
    StructDecl,
    ClassDecl,
    EnumDecl,
    ActorDecl,
    ExtensionDecl,
    ProtocolDecl,
    /// `{ ... }` member list of a declaration group.
    MemberBlock,
    /// `: A, B` inheritance clause.
    InheritanceClause,
    InheritedType,
    VariableDecl,
    PatternBinding,
    IdentifierPattern,
    WildcardPattern,
    TuplePattern,
    TuplePatternElement,
    /// `: T` after a pattern or parameter.
    TypeAnnotation,
    /// `= expr`
    InitializerClause,
    AccessorBlock,
    AccessorDecl,
    FunctionDecl,
    ParameterClause,
    FunctionParameter,
    /// `-> T`
    ReturnClause,
    /// `async throws` between parameters and return clause.
    EffectSpecifiers,
    /// Brace-delimited body, kept as an untouched token subtree.
    CodeBlock,
    /// `<T, U>` generic parameter soup on a declaration.
    GenericParameterClause,
    EnumCaseDecl,
    ImportDecl,
    /// Any member declaration the toolkit does not model.
    UnknownDecl,

    // === Attribute nodes ===
    Attribute,
    AttributeList,
    ModifierList,
    /// `#if ... #endif` block inside an attribute list or member block.
    IfConfigDecl,

    // === Expression nodes ===
    IntegerLiteralExpr,
    FloatLiteralExpr,
    StringLiteralExpr,
    BooleanLiteralExpr,
    NilLiteralExpr,
    RegexLiteralExpr,
    ArrayExpr,
    ArrayElement,
    TupleExpr,
    TupleExprElement,
    /// `-x` and other prefix operator applications.
    PrefixOpExpr,
    MemberAccessExpr,
    CallExpr,
    CallArgument,
    IdentifierExpr,
    /// Token soup for expressions the toolkit does not model.
    UnknownExpr,
}

impl SyntaxKind {
    /// Whether this kind names a type node.
    pub fn is_type(self) -> bool {
        use SyntaxKind::*;
        matches!(
            self,
            AttributedType
                | ArrayType
                | ClassRestrictionType
                | CompositionType
                | SomeOrAnyType
                | DictionaryType
                | FunctionType
                | ImplicitlyUnwrappedOptionalType
                | MemberType
                | MetatypeType
                | MissingType
                | OptionalType
                | PackExpansionType
                | PackReferenceType
                | SimpleType
                | SuppressedType
                | TupleType
        )
    }

    /// Whether this kind names a declaration node.
    pub fn is_decl(self) -> bool {
        use SyntaxKind::*;
        matches!(
            self,
            StructDecl
                | ClassDecl
                | EnumDecl
                | ActorDecl
                | ExtensionDecl
                | ProtocolDecl
                | VariableDecl
                | FunctionDecl
                | EnumCaseDecl
                | ImportDecl
                | IfConfigDecl
                | UnknownDecl
        )
    }

    /// Whether this kind names an access-level modifier token.
    pub fn is_access_modifier(self) -> bool {
        use SyntaxKind::*;
        matches!(
            self,
            PublicKeyword
                | PrivateKeyword
                | InternalKeyword
                | FileprivateKeyword
                | PackageKeyword
                | OpenKeyword
        )
    }
}
