//! The closed set of C# syntax node kinds.

use super::csharp::{KIND_COUNT, KIND_DEFS};

/// Kind tag of a syntax graph node.
///
/// Covers the abstract intermediate kinds (`Base`, `Positioned`,
/// `ExpressionSyntax`, ...) as well as the concrete ones a front-end
/// instantiates. The discriminant indexes the kind table, so variants are
/// declared in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum NodeKind {
    // Base
    Base,
    Positioned,

    // Expressions
    AliasQualifiedNameSyntax,
    AnonymousFunctionExpressionSyntax,
    AnonymousMethodExpressionSyntax,
    AnonymousObjectCreationExpressionSyntax,
    ArrayCreationExpressionSyntax,
    ArrayTypeSyntax,
    AssignmentExpressionSyntax,
    AwaitExpressionSyntax,
    BaseExpressionSyntax,
    BinaryExpressionSyntax,
    CastExpressionSyntax,
    CheckedExpressionSyntax,
    ConditionalAccessExpressionSyntax,
    ConditionalExpressionSyntax,
    DefaultExpressionSyntax,
    ElementAccessExpressionSyntax,
    ElementBindingExpressionSyntax,
    ExpressionSyntax,
    GenericNameSyntax,
    IdentifierNameSyntax,
    ImplicitArrayCreationExpressionSyntax,
    ImplicitElementAccessSyntax,
    InitializerExpressionSyntax,
    InstanceExpressionSyntax,
    InterpolatedStringExpressionSyntax,
    InvocationExpressionSyntax,
    LambdaExpressionSyntax,
    LiteralExpressionSyntax,
    MakeRefExpressionSyntax,
    MemberAccessExpressionSyntax,
    MemberBindingExpressionSyntax,
    NameSyntax,
    NullableTypeSyntax,
    ObjectCreationExpressionSyntax,
    OmittedArraySizeExpressionSyntax,
    OmittedTypeArgumentSyntax,
    ParenthesizedExpressionSyntax,
    ParenthesizedLambdaExpressionSyntax,
    PointerTypeSyntax,
    PostfixUnaryExpressionSyntax,
    PredefinedTypeSyntax,
    PrefixUnaryExpressionSyntax,
    QualifiedNameSyntax,
    QueryExpressionSyntax,
    RefTypeExpressionSyntax,
    RefValueExpressionSyntax,
    SimpleLambdaExpressionSyntax,
    SimpleNameSyntax,
    SizeOfExpressionSyntax,
    StackAllocArrayCreationExpressionSyntax,
    ThisExpressionSyntax,
    TypeOfExpressionSyntax,
    TypeSyntax,

    // Statements
    BlockSyntax,
    BreakStatementSyntax,
    CheckedStatementSyntax,
    ContinueStatementSyntax,
    DoStatementSyntax,
    EmptyStatementSyntax,
    ExpressionStatementSyntax,
    FixedStatementSyntax,
    ForEachStatementSyntax,
    ForStatementSyntax,
    GotoStatementSyntax,
    IfStatementSyntax,
    LabeledStatementSyntax,
    LocalDeclarationStatementSyntax,
    LockStatementSyntax,
    ReturnStatementSyntax,
    StatementSyntax,
    SwitchStatementSyntax,
    ThrowStatementSyntax,
    TryStatementSyntax,
    UnsafeStatementSyntax,
    UsingStatementSyntax,
    WhileStatementSyntax,
    YieldStatementSyntax,

    // Structure
    AccessorDeclarationSyntax,
    AccessorListSyntax,
    AnonymousObjectMemberDeclaratorSyntax,
    ArgumentListSyntax,
    ArgumentSyntax,
    ArrayRankSpecifierSyntax,
    ArrowExpressionClauseSyntax,
    AttributeArgumentListSyntax,
    AttributeArgumentSyntax,
    AttributeListSyntax,
    AttributeSyntax,
    AttributeTargetSpecifierSyntax,
    BaseArgumentListSyntax,
    BaseCrefParameterListSyntax,
    BaseFieldDeclarationSyntax,
    BaseListSyntax,
    BaseMethodDeclarationSyntax,
    BaseParameterListSyntax,
    BasePropertyDeclarationSyntax,
    BaseTypeDeclarationSyntax,
    BaseTypeSyntax,
    BracketedArgumentListSyntax,
    BracketedParameterListSyntax,
    CaseSwitchLabelSyntax,
    CatchClauseSyntax,
    CatchDeclarationSyntax,
    CatchFilterClauseSyntax,
    ClassDeclarationSyntax,
    ClassOrStructConstraintSyntax,
    CompilationUnitSyntax,
    ConstructorConstraintSyntax,
    ConstructorDeclarationSyntax,
    ConstructorInitializerSyntax,
    ConversionOperatorDeclarationSyntax,
    ConversionOperatorMemberCrefSyntax,
    CrefBracketedParameterListSyntax,
    CrefParameterListSyntax,
    CrefParameterSyntax,
    CrefSyntax,
    DefaultSwitchLabelSyntax,
    DelegateDeclarationSyntax,
    DestructorDeclarationSyntax,
    ElseClauseSyntax,
    EnumDeclarationSyntax,
    EnumMemberDeclarationSyntax,
    EqualsValueClauseSyntax,
    EventDeclarationSyntax,
    EventFieldDeclarationSyntax,
    ExplicitInterfaceSpecifierSyntax,
    ExternAliasDirectiveSyntax,
    FieldDeclarationSyntax,
    FinallyClauseSyntax,
    FromClauseSyntax,
    GlobalStatementSyntax,
    GroupClauseSyntax,
    IncompleteMemberSyntax,
    IndexerDeclarationSyntax,
    IndexerMemberCrefSyntax,
    InterfaceDeclarationSyntax,
    InterpolatedStringContentSyntax,
    InterpolatedStringTextSyntax,
    InterpolationAlignmentClauseSyntax,
    InterpolationFormatClauseSyntax,
    InterpolationSyntax,
    JoinClauseSyntax,
    JoinIntoClauseSyntax,
    LetClauseSyntax,
    MemberCrefSyntax,
    MemberDeclarationSyntax,
    MethodDeclarationSyntax,
    NameColonSyntax,
    NameEqualsSyntax,
    NameMemberCrefSyntax,
    NamespaceDeclarationSyntax,
    OperatorDeclarationSyntax,
    OperatorMemberCrefSyntax,
    OrderByClauseSyntax,
    OrderingSyntax,
    ParameterListSyntax,
    ParameterSyntax,
    PropertyDeclarationSyntax,
    QualifiedCrefSyntax,
    QueryBodySyntax,
    QueryClauseSyntax,
    QueryContinuationSyntax,
    SelectClauseSyntax,
    SelectOrGroupClauseSyntax,
    SimpleBaseTypeSyntax,
    StructDeclarationSyntax,
    SwitchLabelSyntax,
    SwitchSectionSyntax,
    SyntaxToken,
    TypeArgumentListSyntax,
    TypeConstraintSyntax,
    TypeCrefSyntax,
    TypeDeclarationSyntax,
    TypeParameterConstraintClauseSyntax,
    TypeParameterConstraintSyntax,
    TypeParameterListSyntax,
    TypeParameterSyntax,
    UsingDirectiveSyntax,
    VariableDeclarationSyntax,
    VariableDeclaratorSyntax,
    WhereClauseSyntax,
    XmlAttributeSyntax,
    XmlCDataSectionSyntax,
    XmlCommentSyntax,
    XmlCrefAttributeSyntax,
    XmlElementEndTagSyntax,
    XmlElementStartTagSyntax,
    XmlElementSyntax,
    XmlEmptyElementSyntax,
    XmlNameAttributeSyntax,
    XmlNameSyntax,
    XmlNodeSyntax,
    XmlPrefixSyntax,
    XmlProcessingInstructionSyntax,
    XmlTextAttributeSyntax,
    XmlTextSyntax,
}

impl NodeKind {
    /// Number of kinds, abstract ones included.
    pub const COUNT: usize = KIND_COUNT;

    /// Position of this kind in the kind table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`NodeKind::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        KIND_DEFS.get(index).map(|def| def.kind)
    }

    /// All kinds in table order.
    pub fn all() -> impl Iterator<Item = NodeKind> {
        KIND_DEFS.iter().map(|def| def.kind)
    }

    /// Schema name, e.g. `IfStatementSyntax`.
    pub fn name(self) -> &'static str {
        KIND_DEFS[self.index()].name
    }

    pub fn is_abstract(self) -> bool {
        KIND_DEFS[self.index()].is_abstract
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
