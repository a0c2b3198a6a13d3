//! Kind and slot tables of the C# syntax graph.
//!
//! Rows are kept in [`NodeKind`] declaration order. Slots of one kind are
//! listed in the order the traversal reports them; inherited slots are
//! prepended by [`Schema`](super::Schema) when the tables are indexed.

use super::{AttrDef, CompositeDef, KindDef, KindGroup as G, SlotDef};
use super::kind::NodeKind as K;

pub(crate) const KIND_COUNT: usize = 198;

const IDENTIFIER: AttrDef = AttrDef::string("identifier");
const TOKEN: AttrDef = AttrDef::string("token");
const POSITION: CompositeDef = CompositeDef::source_position("position");

const fn root(kind: K, name: &'static str, group: G) -> KindDef {
    KindDef::new(kind, name, group, None, true)
}

const fn abstract_kind(kind: K, name: &'static str, group: G, supertype: K) -> KindDef {
    KindDef::new(kind, name, group, Some(supertype), true)
}

const fn concrete(kind: K, name: &'static str, group: G, supertype: K) -> KindDef {
    KindDef::new(kind, name, group, Some(supertype), false)
}

const fn contains(owner: K, name: &'static str, target: K) -> SlotDef {
    SlotDef::containment(owner, name, target)
}

const fn refers(owner: K, name: &'static str, target: K) -> SlotDef {
    SlotDef::reference(owner, name, target)
}

pub(crate) static KIND_DEFS: [KindDef; KIND_COUNT] = [
    // Base
    root(K::Base, "Base", G::Base),
    abstract_kind(K::Positioned, "Positioned", G::Base, K::Base).with_composites(&[POSITION]),

    // Expressions
    concrete(K::AliasQualifiedNameSyntax, "AliasQualifiedNameSyntax", G::Expression, K::NameSyntax),
    abstract_kind(K::AnonymousFunctionExpressionSyntax, "AnonymousFunctionExpressionSyntax", G::Expression, K::ExpressionSyntax).with_attributes(&[IDENTIFIER]),
    concrete(K::AnonymousMethodExpressionSyntax, "AnonymousMethodExpressionSyntax", G::Expression, K::AnonymousFunctionExpressionSyntax),
    concrete(K::AnonymousObjectCreationExpressionSyntax, "AnonymousObjectCreationExpressionSyntax", G::Expression, K::ExpressionSyntax).with_attributes(&[IDENTIFIER]),
    concrete(K::ArrayCreationExpressionSyntax, "ArrayCreationExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::ArrayTypeSyntax, "ArrayTypeSyntax", G::Expression, K::TypeSyntax),
    concrete(K::AssignmentExpressionSyntax, "AssignmentExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::AwaitExpressionSyntax, "AwaitExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::BaseExpressionSyntax, "BaseExpressionSyntax", G::Expression, K::InstanceExpressionSyntax),
    concrete(K::BinaryExpressionSyntax, "BinaryExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::CastExpressionSyntax, "CastExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::CheckedExpressionSyntax, "CheckedExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::ConditionalAccessExpressionSyntax, "ConditionalAccessExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::ConditionalExpressionSyntax, "ConditionalExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::DefaultExpressionSyntax, "DefaultExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::ElementAccessExpressionSyntax, "ElementAccessExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::ElementBindingExpressionSyntax, "ElementBindingExpressionSyntax", G::Expression, K::ExpressionSyntax),
    abstract_kind(K::ExpressionSyntax, "ExpressionSyntax", G::Expression, K::Positioned),
    concrete(K::GenericNameSyntax, "GenericNameSyntax", G::Expression, K::SimpleNameSyntax),
    concrete(K::IdentifierNameSyntax, "IdentifierNameSyntax", G::Expression, K::SimpleNameSyntax),
    concrete(K::ImplicitArrayCreationExpressionSyntax, "ImplicitArrayCreationExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::ImplicitElementAccessSyntax, "ImplicitElementAccessSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::InitializerExpressionSyntax, "InitializerExpressionSyntax", G::Expression, K::ExpressionSyntax),
    abstract_kind(K::InstanceExpressionSyntax, "InstanceExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::InterpolatedStringExpressionSyntax, "InterpolatedStringExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::InvocationExpressionSyntax, "InvocationExpressionSyntax", G::Expression, K::ExpressionSyntax),
    abstract_kind(K::LambdaExpressionSyntax, "LambdaExpressionSyntax", G::Expression, K::AnonymousFunctionExpressionSyntax),
    concrete(K::LiteralExpressionSyntax, "LiteralExpressionSyntax", G::Expression, K::ExpressionSyntax).with_attributes(&[TOKEN]),
    concrete(K::MakeRefExpressionSyntax, "MakeRefExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::MemberAccessExpressionSyntax, "MemberAccessExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::MemberBindingExpressionSyntax, "MemberBindingExpressionSyntax", G::Expression, K::ExpressionSyntax),
    abstract_kind(K::NameSyntax, "NameSyntax", G::Expression, K::TypeSyntax),
    concrete(K::NullableTypeSyntax, "NullableTypeSyntax", G::Expression, K::TypeSyntax),
    concrete(K::ObjectCreationExpressionSyntax, "ObjectCreationExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::OmittedArraySizeExpressionSyntax, "OmittedArraySizeExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::OmittedTypeArgumentSyntax, "OmittedTypeArgumentSyntax", G::Expression, K::TypeSyntax),
    concrete(K::ParenthesizedExpressionSyntax, "ParenthesizedExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::ParenthesizedLambdaExpressionSyntax, "ParenthesizedLambdaExpressionSyntax", G::Expression, K::LambdaExpressionSyntax),
    concrete(K::PointerTypeSyntax, "PointerTypeSyntax", G::Expression, K::TypeSyntax),
    concrete(K::PostfixUnaryExpressionSyntax, "PostfixUnaryExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::PredefinedTypeSyntax, "PredefinedTypeSyntax", G::Expression, K::TypeSyntax),
    concrete(K::PrefixUnaryExpressionSyntax, "PrefixUnaryExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::QualifiedNameSyntax, "QualifiedNameSyntax", G::Expression, K::NameSyntax),
    concrete(K::QueryExpressionSyntax, "QueryExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::RefTypeExpressionSyntax, "RefTypeExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::RefValueExpressionSyntax, "RefValueExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::SimpleLambdaExpressionSyntax, "SimpleLambdaExpressionSyntax", G::Expression, K::LambdaExpressionSyntax),
    abstract_kind(K::SimpleNameSyntax, "SimpleNameSyntax", G::Expression, K::NameSyntax).with_attributes(&[IDENTIFIER]),
    concrete(K::SizeOfExpressionSyntax, "SizeOfExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::StackAllocArrayCreationExpressionSyntax, "StackAllocArrayCreationExpressionSyntax", G::Expression, K::ExpressionSyntax),
    concrete(K::ThisExpressionSyntax, "ThisExpressionSyntax", G::Expression, K::InstanceExpressionSyntax),
    concrete(K::TypeOfExpressionSyntax, "TypeOfExpressionSyntax", G::Expression, K::ExpressionSyntax),
    abstract_kind(K::TypeSyntax, "TypeSyntax", G::Expression, K::ExpressionSyntax),

    // Statements
    concrete(K::BlockSyntax, "BlockSyntax", G::Statement, K::StatementSyntax),
    concrete(K::BreakStatementSyntax, "BreakStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::CheckedStatementSyntax, "CheckedStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::ContinueStatementSyntax, "ContinueStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::DoStatementSyntax, "DoStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::EmptyStatementSyntax, "EmptyStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::ExpressionStatementSyntax, "ExpressionStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::FixedStatementSyntax, "FixedStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::ForEachStatementSyntax, "ForEachStatementSyntax", G::Statement, K::StatementSyntax).with_attributes(&[IDENTIFIER]),
    concrete(K::ForStatementSyntax, "ForStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::GotoStatementSyntax, "GotoStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::IfStatementSyntax, "IfStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::LabeledStatementSyntax, "LabeledStatementSyntax", G::Statement, K::StatementSyntax).with_attributes(&[IDENTIFIER]),
    concrete(K::LocalDeclarationStatementSyntax, "LocalDeclarationStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::LockStatementSyntax, "LockStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::ReturnStatementSyntax, "ReturnStatementSyntax", G::Statement, K::StatementSyntax),
    abstract_kind(K::StatementSyntax, "StatementSyntax", G::Statement, K::Positioned),
    concrete(K::SwitchStatementSyntax, "SwitchStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::ThrowStatementSyntax, "ThrowStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::TryStatementSyntax, "TryStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::UnsafeStatementSyntax, "UnsafeStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::UsingStatementSyntax, "UsingStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::WhileStatementSyntax, "WhileStatementSyntax", G::Statement, K::StatementSyntax),
    concrete(K::YieldStatementSyntax, "YieldStatementSyntax", G::Statement, K::StatementSyntax),

    // Structure
    concrete(K::AccessorDeclarationSyntax, "AccessorDeclarationSyntax", G::Structure, K::Positioned).with_attributes(&[IDENTIFIER]),
    concrete(K::AccessorListSyntax, "AccessorListSyntax", G::Structure, K::Positioned),
    concrete(K::AnonymousObjectMemberDeclaratorSyntax, "AnonymousObjectMemberDeclaratorSyntax", G::Structure, K::Positioned),
    concrete(K::ArgumentListSyntax, "ArgumentListSyntax", G::Structure, K::BaseArgumentListSyntax),
    concrete(K::ArgumentSyntax, "ArgumentSyntax", G::Structure, K::Positioned),
    concrete(K::ArrayRankSpecifierSyntax, "ArrayRankSpecifierSyntax", G::Structure, K::Positioned),
    concrete(K::ArrowExpressionClauseSyntax, "ArrowExpressionClauseSyntax", G::Structure, K::Positioned),
    concrete(K::AttributeArgumentListSyntax, "AttributeArgumentListSyntax", G::Structure, K::Positioned),
    concrete(K::AttributeArgumentSyntax, "AttributeArgumentSyntax", G::Structure, K::Positioned),
    concrete(K::AttributeListSyntax, "AttributeListSyntax", G::Structure, K::Positioned),
    concrete(K::AttributeSyntax, "AttributeSyntax", G::Structure, K::Positioned),
    concrete(K::AttributeTargetSpecifierSyntax, "AttributeTargetSpecifierSyntax", G::Structure, K::Positioned).with_attributes(&[IDENTIFIER]),
    abstract_kind(K::BaseArgumentListSyntax, "BaseArgumentListSyntax", G::Structure, K::Positioned),
    abstract_kind(K::BaseCrefParameterListSyntax, "BaseCrefParameterListSyntax", G::Structure, K::Positioned),
    abstract_kind(K::BaseFieldDeclarationSyntax, "BaseFieldDeclarationSyntax", G::Structure, K::MemberDeclarationSyntax),
    concrete(K::BaseListSyntax, "BaseListSyntax", G::Structure, K::Positioned),
    abstract_kind(K::BaseMethodDeclarationSyntax, "BaseMethodDeclarationSyntax", G::Structure, K::MemberDeclarationSyntax),
    abstract_kind(K::BaseParameterListSyntax, "BaseParameterListSyntax", G::Structure, K::Positioned),
    abstract_kind(K::BasePropertyDeclarationSyntax, "BasePropertyDeclarationSyntax", G::Structure, K::MemberDeclarationSyntax),
    abstract_kind(K::BaseTypeDeclarationSyntax, "BaseTypeDeclarationSyntax", G::Structure, K::MemberDeclarationSyntax).with_attributes(&[IDENTIFIER]),
    abstract_kind(K::BaseTypeSyntax, "BaseTypeSyntax", G::Structure, K::Positioned),
    concrete(K::BracketedArgumentListSyntax, "BracketedArgumentListSyntax", G::Structure, K::BaseArgumentListSyntax),
    concrete(K::BracketedParameterListSyntax, "BracketedParameterListSyntax", G::Structure, K::BaseParameterListSyntax),
    concrete(K::CaseSwitchLabelSyntax, "CaseSwitchLabelSyntax", G::Structure, K::SwitchLabelSyntax),
    concrete(K::CatchClauseSyntax, "CatchClauseSyntax", G::Structure, K::Positioned),
    concrete(K::CatchDeclarationSyntax, "CatchDeclarationSyntax", G::Structure, K::Positioned),
    concrete(K::CatchFilterClauseSyntax, "CatchFilterClauseSyntax", G::Structure, K::Positioned),
    concrete(K::ClassDeclarationSyntax, "ClassDeclarationSyntax", G::Structure, K::TypeDeclarationSyntax),
    concrete(K::ClassOrStructConstraintSyntax, "ClassOrStructConstraintSyntax", G::Structure, K::TypeParameterConstraintSyntax),
    concrete(K::CompilationUnitSyntax, "CompilationUnitSyntax", G::Structure, K::Positioned),
    concrete(K::ConstructorConstraintSyntax, "ConstructorConstraintSyntax", G::Structure, K::TypeParameterConstraintSyntax),
    concrete(K::ConstructorDeclarationSyntax, "ConstructorDeclarationSyntax", G::Structure, K::BaseMethodDeclarationSyntax).with_attributes(&[IDENTIFIER]),
    concrete(K::ConstructorInitializerSyntax, "ConstructorInitializerSyntax", G::Structure, K::Positioned),
    concrete(K::ConversionOperatorDeclarationSyntax, "ConversionOperatorDeclarationSyntax", G::Structure, K::BaseMethodDeclarationSyntax),
    concrete(K::ConversionOperatorMemberCrefSyntax, "ConversionOperatorMemberCrefSyntax", G::Structure, K::MemberCrefSyntax),
    concrete(K::CrefBracketedParameterListSyntax, "CrefBracketedParameterListSyntax", G::Structure, K::BaseCrefParameterListSyntax),
    concrete(K::CrefParameterListSyntax, "CrefParameterListSyntax", G::Structure, K::BaseCrefParameterListSyntax),
    concrete(K::CrefParameterSyntax, "CrefParameterSyntax", G::Structure, K::Positioned),
    abstract_kind(K::CrefSyntax, "CrefSyntax", G::Structure, K::Positioned),
    concrete(K::DefaultSwitchLabelSyntax, "DefaultSwitchLabelSyntax", G::Structure, K::SwitchLabelSyntax),
    concrete(K::DelegateDeclarationSyntax, "DelegateDeclarationSyntax", G::Structure, K::MemberDeclarationSyntax).with_attributes(&[IDENTIFIER]),
    concrete(K::DestructorDeclarationSyntax, "DestructorDeclarationSyntax", G::Structure, K::BaseMethodDeclarationSyntax).with_attributes(&[IDENTIFIER]),
    concrete(K::ElseClauseSyntax, "ElseClauseSyntax", G::Structure, K::Positioned),
    concrete(K::EnumDeclarationSyntax, "EnumDeclarationSyntax", G::Structure, K::BaseTypeDeclarationSyntax),
    concrete(K::EnumMemberDeclarationSyntax, "EnumMemberDeclarationSyntax", G::Structure, K::MemberDeclarationSyntax).with_attributes(&[IDENTIFIER]),
    concrete(K::EqualsValueClauseSyntax, "EqualsValueClauseSyntax", G::Structure, K::Positioned),
    concrete(K::EventDeclarationSyntax, "EventDeclarationSyntax", G::Structure, K::BasePropertyDeclarationSyntax).with_attributes(&[IDENTIFIER]),
    concrete(K::EventFieldDeclarationSyntax, "EventFieldDeclarationSyntax", G::Structure, K::BaseFieldDeclarationSyntax),
    concrete(K::ExplicitInterfaceSpecifierSyntax, "ExplicitInterfaceSpecifierSyntax", G::Structure, K::Positioned),
    concrete(K::ExternAliasDirectiveSyntax, "ExternAliasDirectiveSyntax", G::Structure, K::Positioned).with_attributes(&[IDENTIFIER]),
    concrete(K::FieldDeclarationSyntax, "FieldDeclarationSyntax", G::Structure, K::BaseFieldDeclarationSyntax),
    concrete(K::FinallyClauseSyntax, "FinallyClauseSyntax", G::Structure, K::Positioned),
    concrete(K::FromClauseSyntax, "FromClauseSyntax", G::Structure, K::QueryClauseSyntax).with_attributes(&[IDENTIFIER]),
    concrete(K::GlobalStatementSyntax, "GlobalStatementSyntax", G::Structure, K::MemberDeclarationSyntax),
    concrete(K::GroupClauseSyntax, "GroupClauseSyntax", G::Structure, K::SelectOrGroupClauseSyntax),
    concrete(K::IncompleteMemberSyntax, "IncompleteMemberSyntax", G::Structure, K::MemberDeclarationSyntax),
    concrete(K::IndexerDeclarationSyntax, "IndexerDeclarationSyntax", G::Structure, K::BasePropertyDeclarationSyntax),
    concrete(K::IndexerMemberCrefSyntax, "IndexerMemberCrefSyntax", G::Structure, K::MemberCrefSyntax),
    concrete(K::InterfaceDeclarationSyntax, "InterfaceDeclarationSyntax", G::Structure, K::TypeDeclarationSyntax),
    abstract_kind(K::InterpolatedStringContentSyntax, "InterpolatedStringContentSyntax", G::Structure, K::Positioned),
    concrete(K::InterpolatedStringTextSyntax, "InterpolatedStringTextSyntax", G::Structure, K::InterpolatedStringContentSyntax),
    concrete(K::InterpolationAlignmentClauseSyntax, "InterpolationAlignmentClauseSyntax", G::Structure, K::Positioned),
    concrete(K::InterpolationFormatClauseSyntax, "InterpolationFormatClauseSyntax", G::Structure, K::Positioned),
    concrete(K::InterpolationSyntax, "InterpolationSyntax", G::Structure, K::InterpolatedStringContentSyntax),
    concrete(K::JoinClauseSyntax, "JoinClauseSyntax", G::Structure, K::QueryClauseSyntax).with_attributes(&[IDENTIFIER]),
    concrete(K::JoinIntoClauseSyntax, "JoinIntoClauseSyntax", G::Structure, K::Positioned).with_attributes(&[IDENTIFIER]),
    concrete(K::LetClauseSyntax, "LetClauseSyntax", G::Structure, K::QueryClauseSyntax).with_attributes(&[IDENTIFIER]),
    abstract_kind(K::MemberCrefSyntax, "MemberCrefSyntax", G::Structure, K::CrefSyntax),
    abstract_kind(K::MemberDeclarationSyntax, "MemberDeclarationSyntax", G::Structure, K::Positioned),
    concrete(K::MethodDeclarationSyntax, "MethodDeclarationSyntax", G::Structure, K::BaseMethodDeclarationSyntax).with_attributes(&[IDENTIFIER]),
    concrete(K::NameColonSyntax, "NameColonSyntax", G::Structure, K::Positioned),
    concrete(K::NameEqualsSyntax, "NameEqualsSyntax", G::Structure, K::Positioned),
    concrete(K::NameMemberCrefSyntax, "NameMemberCrefSyntax", G::Structure, K::MemberCrefSyntax),
    concrete(K::NamespaceDeclarationSyntax, "NamespaceDeclarationSyntax", G::Structure, K::MemberDeclarationSyntax),
    concrete(K::OperatorDeclarationSyntax, "OperatorDeclarationSyntax", G::Structure, K::BaseMethodDeclarationSyntax),
    concrete(K::OperatorMemberCrefSyntax, "OperatorMemberCrefSyntax", G::Structure, K::MemberCrefSyntax),
    concrete(K::OrderByClauseSyntax, "OrderByClauseSyntax", G::Structure, K::QueryClauseSyntax),
    concrete(K::OrderingSyntax, "OrderingSyntax", G::Structure, K::Positioned),
    concrete(K::ParameterListSyntax, "ParameterListSyntax", G::Structure, K::BaseParameterListSyntax),
    concrete(K::ParameterSyntax, "ParameterSyntax", G::Structure, K::Positioned).with_attributes(&[IDENTIFIER]),
    concrete(K::PropertyDeclarationSyntax, "PropertyDeclarationSyntax", G::Structure, K::BasePropertyDeclarationSyntax).with_attributes(&[IDENTIFIER]),
    concrete(K::QualifiedCrefSyntax, "QualifiedCrefSyntax", G::Structure, K::CrefSyntax),
    concrete(K::QueryBodySyntax, "QueryBodySyntax", G::Structure, K::Positioned),
    abstract_kind(K::QueryClauseSyntax, "QueryClauseSyntax", G::Structure, K::Positioned),
    concrete(K::QueryContinuationSyntax, "QueryContinuationSyntax", G::Structure, K::Positioned).with_attributes(&[IDENTIFIER]),
    concrete(K::SelectClauseSyntax, "SelectClauseSyntax", G::Structure, K::SelectOrGroupClauseSyntax),
    abstract_kind(K::SelectOrGroupClauseSyntax, "SelectOrGroupClauseSyntax", G::Structure, K::Positioned),
    concrete(K::SimpleBaseTypeSyntax, "SimpleBaseTypeSyntax", G::Structure, K::BaseTypeSyntax),
    concrete(K::StructDeclarationSyntax, "StructDeclarationSyntax", G::Structure, K::TypeDeclarationSyntax),
    abstract_kind(K::SwitchLabelSyntax, "SwitchLabelSyntax", G::Structure, K::Positioned),
    concrete(K::SwitchSectionSyntax, "SwitchSectionSyntax", G::Structure, K::Positioned),
    concrete(K::SyntaxToken, "SyntaxToken", G::Structure, K::Positioned),
    concrete(K::TypeArgumentListSyntax, "TypeArgumentListSyntax", G::Structure, K::Positioned),
    concrete(K::TypeConstraintSyntax, "TypeConstraintSyntax", G::Structure, K::TypeParameterConstraintSyntax),
    concrete(K::TypeCrefSyntax, "TypeCrefSyntax", G::Structure, K::CrefSyntax),
    abstract_kind(K::TypeDeclarationSyntax, "TypeDeclarationSyntax", G::Structure, K::BaseTypeDeclarationSyntax),
    concrete(K::TypeParameterConstraintClauseSyntax, "TypeParameterConstraintClauseSyntax", G::Structure, K::Positioned),
    abstract_kind(K::TypeParameterConstraintSyntax, "TypeParameterConstraintSyntax", G::Structure, K::Positioned),
    concrete(K::TypeParameterListSyntax, "TypeParameterListSyntax", G::Structure, K::Positioned),
    concrete(K::TypeParameterSyntax, "TypeParameterSyntax", G::Structure, K::Positioned).with_attributes(&[IDENTIFIER]),
    concrete(K::UsingDirectiveSyntax, "UsingDirectiveSyntax", G::Structure, K::Positioned),
    concrete(K::VariableDeclarationSyntax, "VariableDeclarationSyntax", G::Structure, K::Positioned),
    concrete(K::VariableDeclaratorSyntax, "VariableDeclaratorSyntax", G::Structure, K::Positioned).with_attributes(&[IDENTIFIER]),
    concrete(K::WhereClauseSyntax, "WhereClauseSyntax", G::Structure, K::QueryClauseSyntax),
    abstract_kind(K::XmlAttributeSyntax, "XmlAttributeSyntax", G::Structure, K::Positioned),
    concrete(K::XmlCDataSectionSyntax, "XmlCDataSectionSyntax", G::Structure, K::XmlNodeSyntax),
    concrete(K::XmlCommentSyntax, "XmlCommentSyntax", G::Structure, K::XmlNodeSyntax),
    concrete(K::XmlCrefAttributeSyntax, "XmlCrefAttributeSyntax", G::Structure, K::XmlAttributeSyntax),
    concrete(K::XmlElementEndTagSyntax, "XmlElementEndTagSyntax", G::Structure, K::Positioned),
    concrete(K::XmlElementStartTagSyntax, "XmlElementStartTagSyntax", G::Structure, K::Positioned),
    concrete(K::XmlElementSyntax, "XmlElementSyntax", G::Structure, K::XmlNodeSyntax),
    concrete(K::XmlEmptyElementSyntax, "XmlEmptyElementSyntax", G::Structure, K::XmlNodeSyntax),
    concrete(K::XmlNameAttributeSyntax, "XmlNameAttributeSyntax", G::Structure, K::XmlAttributeSyntax),
    concrete(K::XmlNameSyntax, "XmlNameSyntax", G::Structure, K::Positioned),
    abstract_kind(K::XmlNodeSyntax, "XmlNodeSyntax", G::Structure, K::Positioned),
    concrete(K::XmlPrefixSyntax, "XmlPrefixSyntax", G::Structure, K::Positioned),
    concrete(K::XmlProcessingInstructionSyntax, "XmlProcessingInstructionSyntax", G::Structure, K::XmlNodeSyntax),
    concrete(K::XmlTextAttributeSyntax, "XmlTextAttributeSyntax", G::Structure, K::XmlAttributeSyntax),
    concrete(K::XmlTextSyntax, "XmlTextSyntax", G::Structure, K::XmlNodeSyntax),
];

pub(crate) static SLOT_DEFS: &[SlotDef] = &[
    contains(K::AliasQualifiedNameSyntax, "Alias", K::IdentifierNameSyntax).one(),
    contains(K::AliasQualifiedNameSyntax, "Name", K::SimpleNameSyntax),
    contains(K::AnonymousFunctionExpressionSyntax, "Body", K::Positioned),
    contains(K::AnonymousMethodExpressionSyntax, "ParameterList", K::ParameterListSyntax),
    contains(K::AnonymousObjectCreationExpressionSyntax, "Initializers", K::AnonymousObjectMemberDeclaratorSyntax).many(),
    contains(K::ArrayCreationExpressionSyntax, "Initializer", K::InitializerExpressionSyntax),
    contains(K::ArrayCreationExpressionSyntax, "Type", K::ArrayTypeSyntax),
    contains(K::ArrayTypeSyntax, "ElementType", K::TypeSyntax).one(),
    contains(K::ArrayTypeSyntax, "RankSpecifiers", K::ArrayRankSpecifierSyntax).many(),
    refers(K::AssignmentExpressionSyntax, "EventAccessorCall", K::AccessorDeclarationSyntax),
    contains(K::AssignmentExpressionSyntax, "Left", K::ExpressionSyntax).one(),
    refers(K::AssignmentExpressionSyntax, "OverloadedOperatorCall", K::OperatorDeclarationSyntax),
    contains(K::AssignmentExpressionSyntax, "Right", K::ExpressionSyntax).one(),
    contains(K::AwaitExpressionSyntax, "Expression", K::ExpressionSyntax),
    contains(K::BinaryExpressionSyntax, "Left", K::ExpressionSyntax).one(),
    refers(K::BinaryExpressionSyntax, "OverloadedOperatorCall", K::OperatorDeclarationSyntax),
    contains(K::BinaryExpressionSyntax, "Right", K::ExpressionSyntax).one(),
    refers(K::CastExpressionSyntax, "ConversionOperatorCall", K::ConversionOperatorDeclarationSyntax),
    contains(K::CastExpressionSyntax, "Expression", K::ExpressionSyntax),
    contains(K::CastExpressionSyntax, "Type", K::TypeSyntax),
    contains(K::CheckedExpressionSyntax, "Expression", K::ExpressionSyntax),
    contains(K::ConditionalAccessExpressionSyntax, "Expression", K::ExpressionSyntax),
    contains(K::ConditionalAccessExpressionSyntax, "WhenNotNull", K::ExpressionSyntax),
    contains(K::ConditionalExpressionSyntax, "Condition", K::ExpressionSyntax).one(),
    contains(K::ConditionalExpressionSyntax, "WhenFalse", K::ExpressionSyntax).one(),
    contains(K::ConditionalExpressionSyntax, "WhenTrue", K::ExpressionSyntax).one(),
    contains(K::DefaultExpressionSyntax, "Type", K::TypeSyntax),
    refers(K::ElementAccessExpressionSyntax, "AccessorCall", K::AccessorDeclarationSyntax),
    contains(K::ElementAccessExpressionSyntax, "ArgumentList", K::BracketedArgumentListSyntax),
    contains(K::ElementAccessExpressionSyntax, "Expression", K::ExpressionSyntax),
    contains(K::ElementBindingExpressionSyntax, "ArgumentList", K::BracketedArgumentListSyntax),
    contains(K::GenericNameSyntax, "TypeArgumentList", K::TypeArgumentListSyntax),
    refers(K::IdentifierNameSyntax, "AccessorCall", K::AccessorDeclarationSyntax),
    refers(K::IdentifierNameSyntax, "Declaration", K::Positioned),
    contains(K::ImplicitArrayCreationExpressionSyntax, "Initializer", K::InitializerExpressionSyntax),
    contains(K::ImplicitElementAccessSyntax, "ArgumentList", K::BracketedArgumentListSyntax),
    contains(K::InitializerExpressionSyntax, "Expressions", K::ExpressionSyntax).many(),
    contains(K::InterpolatedStringExpressionSyntax, "Contents", K::InterpolatedStringContentSyntax).many(),
    contains(K::InvocationExpressionSyntax, "ArgumentList", K::ArgumentListSyntax),
    contains(K::InvocationExpressionSyntax, "Expression", K::ExpressionSyntax),
    refers(K::InvocationExpressionSyntax, "MethodCall", K::MethodDeclarationSyntax),
    contains(K::MakeRefExpressionSyntax, "Expression", K::ExpressionSyntax),
    contains(K::MemberAccessExpressionSyntax, "Expression", K::ExpressionSyntax),
    contains(K::MemberAccessExpressionSyntax, "Name", K::SimpleNameSyntax),
    contains(K::MemberBindingExpressionSyntax, "Name", K::SimpleNameSyntax),
    contains(K::NullableTypeSyntax, "ElementType", K::TypeSyntax).one(),
    contains(K::ObjectCreationExpressionSyntax, "ArgumentList", K::ArgumentListSyntax),
    refers(K::ObjectCreationExpressionSyntax, "ConstructorCall", K::ConstructorDeclarationSyntax),
    contains(K::ObjectCreationExpressionSyntax, "Initializer", K::InitializerExpressionSyntax),
    contains(K::ObjectCreationExpressionSyntax, "Type", K::TypeSyntax),
    contains(K::ParenthesizedExpressionSyntax, "Expression", K::ExpressionSyntax),
    contains(K::ParenthesizedLambdaExpressionSyntax, "ParameterList", K::ParameterListSyntax),
    contains(K::PointerTypeSyntax, "ElementType", K::TypeSyntax).one(),
    contains(K::PostfixUnaryExpressionSyntax, "Operand", K::ExpressionSyntax).one(),
    refers(K::PostfixUnaryExpressionSyntax, "OverloadedOperatorCall", K::OperatorDeclarationSyntax),
    contains(K::PrefixUnaryExpressionSyntax, "Operand", K::ExpressionSyntax).one(),
    refers(K::PrefixUnaryExpressionSyntax, "OverloadedOperatorCall", K::OperatorDeclarationSyntax),
    contains(K::QualifiedNameSyntax, "Left", K::NameSyntax).one(),
    contains(K::QualifiedNameSyntax, "Right", K::SimpleNameSyntax).one(),
    contains(K::QueryExpressionSyntax, "Body", K::QueryBodySyntax),
    contains(K::QueryExpressionSyntax, "FromClause", K::FromClauseSyntax).one(),
    contains(K::RefTypeExpressionSyntax, "Expression", K::ExpressionSyntax),
    contains(K::RefValueExpressionSyntax, "Expression", K::ExpressionSyntax),
    contains(K::RefValueExpressionSyntax, "Type", K::TypeSyntax),
    contains(K::SimpleLambdaExpressionSyntax, "Parameter", K::ParameterSyntax),
    contains(K::SizeOfExpressionSyntax, "Type", K::TypeSyntax),
    contains(K::StackAllocArrayCreationExpressionSyntax, "Type", K::TypeSyntax),
    contains(K::TypeOfExpressionSyntax, "Type", K::TypeSyntax),
    refers(K::TypeSyntax, "OriginalDefinition", K::MemberDeclarationSyntax),
    contains(K::BlockSyntax, "Statements", K::StatementSyntax).many(),
    contains(K::CheckedStatementSyntax, "Block", K::BlockSyntax),
    contains(K::DoStatementSyntax, "Condition", K::ExpressionSyntax).one(),
    contains(K::DoStatementSyntax, "Statement", K::StatementSyntax),
    contains(K::ExpressionStatementSyntax, "Expression", K::ExpressionSyntax),
    contains(K::FixedStatementSyntax, "Declaration", K::VariableDeclarationSyntax),
    contains(K::FixedStatementSyntax, "Statement", K::StatementSyntax),
    contains(K::ForEachStatementSyntax, "Expression", K::ExpressionSyntax),
    contains(K::ForEachStatementSyntax, "Statement", K::StatementSyntax),
    contains(K::ForEachStatementSyntax, "Type", K::TypeSyntax),
    contains(K::ForStatementSyntax, "Condition", K::ExpressionSyntax),
    contains(K::ForStatementSyntax, "Declaration", K::VariableDeclarationSyntax),
    contains(K::ForStatementSyntax, "Incrementors", K::ExpressionSyntax).many(),
    contains(K::ForStatementSyntax, "Initializers", K::ExpressionSyntax).many(),
    contains(K::ForStatementSyntax, "Statement", K::StatementSyntax),
    contains(K::GotoStatementSyntax, "Expression", K::ExpressionSyntax),
    contains(K::IfStatementSyntax, "Condition", K::ExpressionSyntax).one(),
    contains(K::IfStatementSyntax, "Else", K::ElseClauseSyntax),
    contains(K::IfStatementSyntax, "Statement", K::StatementSyntax),
    contains(K::LabeledStatementSyntax, "Statement", K::StatementSyntax),
    contains(K::LocalDeclarationStatementSyntax, "Declaration", K::VariableDeclarationSyntax),
    contains(K::LockStatementSyntax, "Expression", K::ExpressionSyntax),
    contains(K::LockStatementSyntax, "Statement", K::StatementSyntax),
    contains(K::ReturnStatementSyntax, "Expression", K::ExpressionSyntax),
    contains(K::SwitchStatementSyntax, "Expression", K::ExpressionSyntax),
    contains(K::SwitchStatementSyntax, "Sections", K::SwitchSectionSyntax).many(),
    contains(K::ThrowStatementSyntax, "Expression", K::ExpressionSyntax),
    contains(K::TryStatementSyntax, "Block", K::BlockSyntax),
    contains(K::TryStatementSyntax, "Catches", K::CatchClauseSyntax).many(),
    contains(K::TryStatementSyntax, "Finally", K::FinallyClauseSyntax),
    contains(K::UnsafeStatementSyntax, "Block", K::BlockSyntax),
    contains(K::UsingStatementSyntax, "Declaration", K::VariableDeclarationSyntax),
    contains(K::UsingStatementSyntax, "Expression", K::ExpressionSyntax),
    contains(K::UsingStatementSyntax, "Statement", K::StatementSyntax),
    contains(K::WhileStatementSyntax, "Condition", K::ExpressionSyntax).one(),
    contains(K::WhileStatementSyntax, "Statement", K::StatementSyntax),
    contains(K::YieldStatementSyntax, "Expression", K::ExpressionSyntax),
    contains(K::AccessorDeclarationSyntax, "AttributeLists", K::AttributeListSyntax).many(),
    contains(K::AccessorDeclarationSyntax, "Body", K::BlockSyntax),
    contains(K::AccessorListSyntax, "Accessors", K::AccessorDeclarationSyntax).many(),
    contains(K::AnonymousObjectMemberDeclaratorSyntax, "Expression", K::ExpressionSyntax),
    contains(K::AnonymousObjectMemberDeclaratorSyntax, "NameEquals", K::NameEqualsSyntax),
    contains(K::ArgumentSyntax, "Expression", K::ExpressionSyntax),
    contains(K::ArgumentSyntax, "NameColon", K::NameColonSyntax),
    contains(K::ArrayRankSpecifierSyntax, "Sizes", K::ExpressionSyntax).many(),
    contains(K::ArrowExpressionClauseSyntax, "Expression", K::ExpressionSyntax),
    contains(K::AttributeArgumentListSyntax, "Arguments", K::AttributeArgumentSyntax).many(),
    contains(K::AttributeArgumentSyntax, "Expression", K::ExpressionSyntax),
    contains(K::AttributeArgumentSyntax, "NameColon", K::NameColonSyntax),
    contains(K::AttributeArgumentSyntax, "NameEquals", K::NameEqualsSyntax),
    contains(K::AttributeListSyntax, "Attributes", K::AttributeSyntax).many(),
    contains(K::AttributeListSyntax, "Target", K::AttributeTargetSpecifierSyntax),
    contains(K::AttributeSyntax, "ArgumentList", K::AttributeArgumentListSyntax),
    contains(K::AttributeSyntax, "Name", K::NameSyntax),
    contains(K::BaseArgumentListSyntax, "Arguments", K::ArgumentSyntax).many(),
    contains(K::BaseCrefParameterListSyntax, "Parameters", K::CrefParameterSyntax).many(),
    contains(K::BaseFieldDeclarationSyntax, "AttributeLists", K::AttributeListSyntax).many(),
    contains(K::BaseFieldDeclarationSyntax, "Declaration", K::VariableDeclarationSyntax),
    contains(K::BaseListSyntax, "Types", K::BaseTypeSyntax).many(),
    refers(K::BaseMethodDeclarationSyntax, "AccessedEnumMembers", K::EnumMemberDeclarationSyntax).many(),
    contains(K::BaseMethodDeclarationSyntax, "AttributeLists", K::AttributeListSyntax).many(),
    contains(K::BaseMethodDeclarationSyntax, "Body", K::BlockSyntax),
    contains(K::BaseMethodDeclarationSyntax, "ParameterList", K::ParameterListSyntax).one(),
    contains(K::BaseParameterListSyntax, "Parameters", K::ParameterSyntax).many(),
    contains(K::BasePropertyDeclarationSyntax, "AccessorList", K::AccessorListSyntax),
    contains(K::BasePropertyDeclarationSyntax, "AttributeLists", K::AttributeListSyntax).many(),
    contains(K::BasePropertyDeclarationSyntax, "ExplicitInterfaceSpecifier", K::ExplicitInterfaceSpecifierSyntax),
    contains(K::BasePropertyDeclarationSyntax, "Type", K::TypeSyntax),
    contains(K::BaseTypeDeclarationSyntax, "AttributeLists", K::AttributeListSyntax).many(),
    contains(K::BaseTypeDeclarationSyntax, "BaseList", K::BaseListSyntax),
    contains(K::BaseTypeSyntax, "Type", K::TypeSyntax),
    contains(K::CaseSwitchLabelSyntax, "Value", K::ExpressionSyntax),
    contains(K::CatchClauseSyntax, "Block", K::BlockSyntax),
    contains(K::CatchClauseSyntax, "Declaration", K::CatchDeclarationSyntax),
    contains(K::CatchClauseSyntax, "Filter", K::CatchFilterClauseSyntax),
    contains(K::CatchDeclarationSyntax, "Type", K::TypeSyntax),
    contains(K::CatchFilterClauseSyntax, "FilterExpression", K::ExpressionSyntax),
    contains(K::CompilationUnitSyntax, "AttributeLists", K::AttributeListSyntax).many(),
    contains(K::CompilationUnitSyntax, "Externs", K::ExternAliasDirectiveSyntax).many(),
    contains(K::CompilationUnitSyntax, "Members", K::MemberDeclarationSyntax).many(),
    contains(K::CompilationUnitSyntax, "Usings", K::UsingDirectiveSyntax).many(),
    contains(K::ConstructorDeclarationSyntax, "Initializer", K::ConstructorInitializerSyntax),
    contains(K::ConstructorInitializerSyntax, "ArgumentList", K::ArgumentListSyntax),
    refers(K::ConstructorInitializerSyntax, "ConstructorCall", K::ConstructorDeclarationSyntax),
    contains(K::ConversionOperatorDeclarationSyntax, "ExpressionBody", K::ArrowExpressionClauseSyntax),
    contains(K::ConversionOperatorDeclarationSyntax, "Type", K::TypeSyntax).one(),
    contains(K::ConversionOperatorMemberCrefSyntax, "Parameters", K::CrefParameterListSyntax).many(),
    contains(K::ConversionOperatorMemberCrefSyntax, "Type", K::TypeSyntax),
    contains(K::CrefParameterSyntax, "Type", K::TypeSyntax),
    contains(K::DelegateDeclarationSyntax, "AttributeLists", K::AttributeListSyntax).many(),
    contains(K::DelegateDeclarationSyntax, "ConstraintClauses", K::TypeParameterConstraintClauseSyntax).many(),
    contains(K::DelegateDeclarationSyntax, "ParameterList", K::ParameterListSyntax).one(),
    contains(K::DelegateDeclarationSyntax, "ReturnType", K::TypeSyntax).one(),
    contains(K::ElseClauseSyntax, "Statement", K::StatementSyntax),
    contains(K::EnumDeclarationSyntax, "Members", K::EnumMemberDeclarationSyntax).many(),
    contains(K::EnumMemberDeclarationSyntax, "AttributeLists", K::AttributeListSyntax).many(),
    contains(K::EnumMemberDeclarationSyntax, "EqualsValue", K::EqualsValueClauseSyntax),
    contains(K::EqualsValueClauseSyntax, "Value", K::ExpressionSyntax),
    contains(K::ExplicitInterfaceSpecifierSyntax, "Name", K::NameSyntax),
    contains(K::FinallyClauseSyntax, "Block", K::BlockSyntax),
    contains(K::FromClauseSyntax, "Expression", K::ExpressionSyntax),
    contains(K::FromClauseSyntax, "Type", K::TypeSyntax),
    contains(K::GlobalStatementSyntax, "Statement", K::StatementSyntax),
    contains(K::GroupClauseSyntax, "ByExpression", K::ExpressionSyntax).one(),
    contains(K::GroupClauseSyntax, "GroupExpression", K::ExpressionSyntax).one(),
    contains(K::IncompleteMemberSyntax, "AttributeLists", K::AttributeListSyntax).many(),
    contains(K::IncompleteMemberSyntax, "Type", K::TypeSyntax),
    contains(K::IndexerDeclarationSyntax, "ExpressionBody", K::ArrowExpressionClauseSyntax),
    contains(K::IndexerDeclarationSyntax, "ParameterList", K::BracketedParameterListSyntax),
    contains(K::IndexerMemberCrefSyntax, "Parameters", K::CrefBracketedParameterListSyntax).many(),
    contains(K::InterpolationAlignmentClauseSyntax, "Value", K::ExpressionSyntax),
    contains(K::InterpolationSyntax, "AlignmentClause", K::InterpolationAlignmentClauseSyntax),
    contains(K::InterpolationSyntax, "Expression", K::ExpressionSyntax),
    contains(K::InterpolationSyntax, "FormatClause", K::InterpolationFormatClauseSyntax),
    contains(K::JoinClauseSyntax, "InExpression", K::ExpressionSyntax).one(),
    contains(K::JoinClauseSyntax, "Into", K::JoinIntoClauseSyntax),
    contains(K::JoinClauseSyntax, "LeftExpression", K::ExpressionSyntax).one(),
    contains(K::JoinClauseSyntax, "RightExpression", K::ExpressionSyntax).one(),
    contains(K::JoinClauseSyntax, "Type", K::TypeSyntax),
    contains(K::LetClauseSyntax, "Expression", K::ExpressionSyntax),
    contains(K::MethodDeclarationSyntax, "ConstraintClauses", K::TypeParameterConstraintClauseSyntax).many(),
    contains(K::MethodDeclarationSyntax, "ExplicitInterfaceSpecifier", K::ExplicitInterfaceSpecifierSyntax),
    contains(K::MethodDeclarationSyntax, "ExpressionBody", K::ArrowExpressionClauseSyntax),
    contains(K::MethodDeclarationSyntax, "ReturnType", K::TypeSyntax).one(),
    contains(K::NameColonSyntax, "Name", K::IdentifierNameSyntax),
    contains(K::NameEqualsSyntax, "Name", K::IdentifierNameSyntax),
    contains(K::NameMemberCrefSyntax, "Name", K::TypeSyntax),
    contains(K::NameMemberCrefSyntax, "Parameters", K::CrefParameterListSyntax).many(),
    contains(K::NamespaceDeclarationSyntax, "Externs", K::ExternAliasDirectiveSyntax).many(),
    contains(K::NamespaceDeclarationSyntax, "Members", K::MemberDeclarationSyntax).many(),
    contains(K::NamespaceDeclarationSyntax, "Name", K::NameSyntax),
    contains(K::NamespaceDeclarationSyntax, "Usings", K::UsingDirectiveSyntax).many(),
    contains(K::OperatorDeclarationSyntax, "ExpressionBody", K::ArrowExpressionClauseSyntax),
    contains(K::OperatorDeclarationSyntax, "ReturnType", K::TypeSyntax).one(),
    contains(K::OperatorMemberCrefSyntax, "Parameters", K::CrefParameterListSyntax).many(),
    contains(K::OrderByClauseSyntax, "Orderings", K::OrderingSyntax).many(),
    contains(K::OrderingSyntax, "Expression", K::ExpressionSyntax),
    contains(K::ParameterSyntax, "AttributeLists", K::AttributeListSyntax).many(),
    contains(K::ParameterSyntax, "Default", K::EqualsValueClauseSyntax),
    contains(K::ParameterSyntax, "Type", K::TypeSyntax),
    contains(K::PropertyDeclarationSyntax, "ExpressionBody", K::ArrowExpressionClauseSyntax),
    contains(K::PropertyDeclarationSyntax, "Initializer", K::EqualsValueClauseSyntax),
    contains(K::QualifiedCrefSyntax, "Container", K::TypeSyntax),
    contains(K::QualifiedCrefSyntax, "Member", K::MemberCrefSyntax),
    contains(K::QueryBodySyntax, "Clauses", K::QueryClauseSyntax).many(),
    contains(K::QueryBodySyntax, "Continuation", K::QueryContinuationSyntax),
    contains(K::QueryBodySyntax, "SelectOrGroup", K::SelectOrGroupClauseSyntax).one(),
    contains(K::QueryContinuationSyntax, "Body", K::QueryBodySyntax),
    contains(K::SelectClauseSyntax, "Expression", K::ExpressionSyntax),
    contains(K::SwitchSectionSyntax, "Labels", K::SwitchLabelSyntax).many(),
    contains(K::SwitchSectionSyntax, "Statements", K::StatementSyntax).many(),
    contains(K::TypeArgumentListSyntax, "Arguments", K::TypeSyntax).many(),
    contains(K::TypeConstraintSyntax, "Type", K::TypeSyntax),
    contains(K::TypeCrefSyntax, "Type", K::TypeSyntax),
    contains(K::TypeDeclarationSyntax, "ConstraintClauses", K::TypeParameterConstraintClauseSyntax).many(),
    contains(K::TypeDeclarationSyntax, "Members", K::MemberDeclarationSyntax).many(),
    contains(K::TypeDeclarationSyntax, "TypeParameterList", K::TypeParameterListSyntax),
    contains(K::TypeParameterConstraintClauseSyntax, "Constraints", K::TypeParameterConstraintSyntax).many(),
    contains(K::TypeParameterConstraintClauseSyntax, "Name", K::IdentifierNameSyntax),
    contains(K::TypeParameterListSyntax, "Parameters", K::TypeParameterSyntax).many(),
    contains(K::TypeParameterSyntax, "AttributeLists", K::AttributeListSyntax).many(),
    contains(K::UsingDirectiveSyntax, "Alias", K::NameEqualsSyntax),
    contains(K::UsingDirectiveSyntax, "Name", K::NameSyntax).one(),
    contains(K::VariableDeclarationSyntax, "Type", K::TypeSyntax),
    contains(K::VariableDeclarationSyntax, "Variables", K::VariableDeclaratorSyntax).many(),
    contains(K::VariableDeclaratorSyntax, "ArgumentList", K::BracketedArgumentListSyntax),
    contains(K::VariableDeclaratorSyntax, "Initializer", K::EqualsValueClauseSyntax),
    contains(K::WhereClauseSyntax, "Condition", K::ExpressionSyntax).one(),
    contains(K::XmlAttributeSyntax, "Name", K::XmlNameSyntax),
    contains(K::XmlCrefAttributeSyntax, "Cref", K::CrefSyntax),
    contains(K::XmlElementEndTagSyntax, "Name", K::XmlNameSyntax),
    contains(K::XmlElementStartTagSyntax, "Attributes", K::XmlAttributeSyntax).many(),
    contains(K::XmlElementStartTagSyntax, "Name", K::XmlNameSyntax),
    contains(K::XmlElementSyntax, "Content", K::XmlNodeSyntax).many(),
    contains(K::XmlElementSyntax, "EndTag", K::XmlElementEndTagSyntax).one(),
    contains(K::XmlElementSyntax, "StartTag", K::XmlElementStartTagSyntax).one(),
    contains(K::XmlEmptyElementSyntax, "Attributes", K::XmlAttributeSyntax).many(),
    contains(K::XmlEmptyElementSyntax, "Name", K::XmlNameSyntax),
    contains(K::XmlNameAttributeSyntax, "Identifier", K::IdentifierNameSyntax),
    contains(K::XmlNameSyntax, "Prefix", K::XmlPrefixSyntax),
    contains(K::XmlProcessingInstructionSyntax, "Name", K::XmlNameSyntax),
];
