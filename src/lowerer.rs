//! JSX lowering for the soot runtime.
//!
//! Transforms JSX elements into `V(flags, type, className, children, props,
//! key, ref)` factory calls. The argument list is positional with trailing
//! elision: a `null` placeholder only fills a gap in front of a later
//! argument, and once nothing later is present the remaining slots are
//! dropped. One factory binding is hoisted to the top of the module the
//! first time an element is lowered.

use oxc_allocator::{Allocator, Box as oxc_box, CloneIn};
use oxc_ast::ast::*;
use oxc_ast::AstBuilder;
use oxc_ast_visit::walk_mut::walk_expression;
use oxc_ast_visit::VisitMut;
use oxc_parser::Parser;
use oxc_span::{SourceType, SPAN};
use oxc_syntax::number::NumberBase;

use crate::attrs::SVG_COMPAT_ATTRS;
use crate::compile::{ImportSource, LowerOptions};
use crate::flags::{self, TagKind};
use crate::text::normalize_jsx_text;

/// Local name of the hoisted factory binding.
pub const FACTORY_NAME: &str = "V";
/// Module source used when import-style hoisting is enabled without an
/// explicit source override.
pub const DEFAULT_IMPORT_SOURCE: &str = "soot";
/// Global namespace object aliased when no import hoisting is configured.
pub const RUNTIME_NAMESPACE: &str = "soot";

/// Component callback attributes carrying this prefix are merged into an
/// object literal occupying the `ref` slot.
const COMPONENT_HOOK_PREFIX: &str = "onComponent";

/// Identity of one element, resolved from its tag name alone.
struct ElementDescriptor<'a> {
    flags: u32,
    type_expr: Expression<'a>,
    is_component: bool,
}

/// Attribute list partitioned into the positional slots and the generic
/// property bag. `props` is always an object literal, possibly empty; the
/// children-folding step appends into it.
struct ClassifiedProps<'a> {
    props: Expression<'a>,
    key: Option<Expression<'a>>,
    ref_slot: Option<Expression<'a>>,
    class_name: Option<Expression<'a>>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// VNODE LOWERER
// Rewrites JSX elements into V() factory calls
// ═══════════════════════════════════════════════════════════════════════════════

pub struct VNodeLowerer<'a> {
    pub ast: AstBuilder<'a>,
    options: LowerOptions,
    /// Set permanently once the first element of the module is lowered.
    hoisted: bool,
    /// Top-level statement index the factory binding goes in front of.
    hoist_at: Option<usize>,
    stmt_index: usize,
}

impl<'a> VNodeLowerer<'a> {
    pub fn new(allocator: &'a Allocator, options: LowerOptions) -> Self {
        Self {
            ast: AstBuilder::new(allocator),
            options,
            hoisted: false,
            hoist_at: None,
            stmt_index: 0,
        }
    }

    fn lower_element(&mut self, element: &JSXElement<'a>) -> Expression<'a> {
        if !self.hoisted {
            self.hoisted = true;
            self.hoist_at = Some(self.stmt_index);
        }

        let descriptor = self.classify_element(&element.opening_element.name);
        let classified =
            self.classify_props(&element.opening_element.attributes, descriptor.is_component);
        let mut props = classified.props;
        let mut children = Some(self.lower_children(&element.children));

        if descriptor.is_component {
            // Components receive their children through props, never through
            // the positional slot.
            if let Some(folded) = children.take() {
                if !is_empty_array(&folded) {
                    if let Expression::ObjectExpression(bag) = &mut props {
                        let key = PropertyKey::StaticIdentifier(
                            self.ast.alloc(self.ast.identifier_name(SPAN, "children")),
                        );
                        bag.properties.push(self.ast.object_property_kind_object_property(
                            SPAN,
                            PropertyKind::Init,
                            key,
                            folded,
                            false,
                            false,
                            false,
                        ));
                    }
                }
            }
        }

        let args = self.assemble_arguments(
            descriptor.flags,
            descriptor.type_expr,
            classified.class_name,
            children,
            props,
            classified.key,
            classified.ref_slot,
        );

        self.ast.expression_call(
            SPAN,
            self.factory_callee(),
            None::<oxc_box<TSTypeParameterInstantiation>>,
            args,
            false,
        )
    }

    // ─── Tag classification ───

    fn classify_element(&self, name: &JSXElementName<'a>) -> ElementDescriptor<'a> {
        match name {
            JSXElementName::Identifier(id) => self.classify_named(id.name.as_str()),
            JSXElementName::IdentifierReference(id) => self.classify_named(id.name.as_str()),
            JSXElementName::MemberExpression(member) => ElementDescriptor {
                flags: flags::COMPONENT_UNKNOWN,
                type_expr: self.member_type_expression(member),
                is_component: true,
            },
            JSXElementName::NamespacedName(ns) => {
                let tag = format!("{}:{}", ns.namespace.name, ns.name.name);
                let tag_atom = self.ast.allocator.alloc_str(&tag);
                ElementDescriptor {
                    flags: flags::HTML_ELEMENT,
                    type_expr: self.ast.expression_string_literal(SPAN, tag_atom, None),
                    is_component: false,
                }
            }
            JSXElementName::ThisExpression(_) => ElementDescriptor {
                flags: flags::COMPONENT_UNKNOWN,
                type_expr: self.ast.expression_this(SPAN),
                is_component: true,
            },
        }
    }

    fn classify_named(&self, name: &str) -> ElementDescriptor<'a> {
        let name_atom = self.ast.allocator.alloc_str(name);
        match flags::classify_tag(name) {
            TagKind::Component => ElementDescriptor {
                flags: flags::COMPONENT_UNKNOWN,
                type_expr: self.ast.expression_identifier(SPAN, name_atom),
                is_component: true,
            },
            TagKind::HostTag(host_flags) => ElementDescriptor {
                flags: host_flags,
                type_expr: self.ast.expression_string_literal(SPAN, name_atom, None),
                is_component: false,
            },
        }
    }

    fn member_type_expression(&self, member: &JSXMemberExpression<'a>) -> Expression<'a> {
        let object = match &member.object {
            JSXMemberExpressionObject::IdentifierReference(id) => {
                self.ast.expression_identifier(SPAN, id.name.clone())
            }
            JSXMemberExpressionObject::MemberExpression(inner) => {
                self.member_type_expression(inner)
            }
            JSXMemberExpressionObject::ThisExpression(_) => self.ast.expression_this(SPAN),
        };
        Expression::from(self.ast.member_expression_static(
            SPAN,
            object,
            self.ast.identifier_name(SPAN, member.property.name.clone()),
            false,
        ))
    }

    // ─── Attribute classification ───

    fn classify_props(
        &mut self,
        attributes: &oxc_allocator::Vec<'a, JSXAttributeItem<'a>>,
        is_component: bool,
    ) -> ClassifiedProps<'a> {
        let mut entries = self.ast.vec();
        let mut key = None;
        let mut ref_slot: Option<Expression<'a>> = None;
        let mut ref_is_hook_bag = false;
        let mut class_name = None;

        for item in attributes {
            match item {
                JSXAttributeItem::SpreadAttribute(spread) => {
                    let mut argument = spread.argument.clone_in(self.ast.allocator);
                    self.visit_expression(&mut argument);
                    entries.push(
                        self.ast
                            .object_property_kind_spread_property(SPAN, argument),
                    );
                }
                JSXAttributeItem::Attribute(attr) => {
                    let name = attribute_name(&attr.name);
                    let name = name.as_str();

                    if !is_component && (name == "className" || name == "class") {
                        class_name = Some(self.attribute_value(attr.value.as_ref()));
                    } else if !is_component && name == "htmlFor" {
                        let value = self.attribute_value(attr.value.as_ref());
                        entries.push(self.object_entry("for", value));
                    } else if is_component && name.starts_with(COMPONENT_HOOK_PREFIX) {
                        let value = self.attribute_value(attr.value.as_ref());
                        if ref_slot.is_none() {
                            ref_slot = Some(self.ast.expression_object(SPAN, self.ast.vec()));
                            ref_is_hook_bag = true;
                        }
                        // A plain `ref` written earlier wins over callbacks.
                        if ref_is_hook_bag {
                            if let Some(Expression::ObjectExpression(bag)) = ref_slot.as_mut() {
                                let prop_key = self.property_key(name);
                                bag.properties.push(
                                    self.ast.object_property_kind_object_property(
                                        SPAN,
                                        PropertyKind::Init,
                                        prop_key,
                                        value,
                                        false,
                                        false,
                                        false,
                                    ),
                                );
                            }
                        }
                    } else if !is_component && SVG_COMPAT_ATTRS.contains_key(name) {
                        let value = self.attribute_value(attr.value.as_ref());
                        if let Some(canonical) = SVG_COMPAT_ATTRS.get(name) {
                            entries.push(self.object_entry(canonical, value));
                        }
                    } else if name == "ref" {
                        ref_slot = Some(self.attribute_value(attr.value.as_ref()));
                        ref_is_hook_bag = false;
                    } else if name == "key" {
                        key = Some(self.attribute_value(attr.value.as_ref()));
                    } else {
                        let value = self.attribute_value(attr.value.as_ref());
                        entries.push(self.object_entry(name, value));
                    }
                }
            }
        }

        ClassifiedProps {
            props: self.ast.expression_object(SPAN, entries),
            key,
            ref_slot,
            class_name,
        }
    }

    fn attribute_value(&mut self, value: Option<&JSXAttributeValue<'a>>) -> Expression<'a> {
        match value {
            // A bare attribute means boolean true.
            None => self.ast.expression_boolean_literal(SPAN, true),
            Some(JSXAttributeValue::StringLiteral(s)) => {
                Expression::StringLiteral(self.ast.alloc((**s).clone()))
            }
            Some(JSXAttributeValue::ExpressionContainer(container)) => {
                if let Some(expr) = container.expression.as_expression() {
                    let mut expr = expr.clone_in(self.ast.allocator);
                    self.visit_expression(&mut expr);
                    expr
                } else {
                    self.ast.expression_boolean_literal(SPAN, true)
                }
            }
            Some(JSXAttributeValue::Element(element)) => self.lower_element(element),
            Some(JSXAttributeValue::Fragment(_)) => {
                self.ast.expression_boolean_literal(SPAN, true)
            }
        }
    }

    fn object_entry(&self, name: &str, value: Expression<'a>) -> ObjectPropertyKind<'a> {
        let key = self.property_key(name);
        self.ast
            .object_property_kind_object_property(SPAN, PropertyKind::Init, key, value, false, false, false)
    }

    /// Generic property names are emitted as string-literal keys, except
    /// hyphen-prefixed custom attributes which stay bare identifiers.
    fn property_key(&self, name: &str) -> PropertyKey<'a> {
        let name_atom = self.ast.allocator.alloc_str(name);
        if name.starts_with('-') {
            PropertyKey::StaticIdentifier(self.ast.alloc(self.ast.identifier_name(SPAN, name_atom)))
        } else {
            PropertyKey::StringLiteral(
                self.ast
                    .alloc(self.ast.string_literal(SPAN, name_atom, None)),
            )
        }
    }

    // ─── Children ───

    fn lower_children(&mut self, children: &oxc_allocator::Vec<'a, JSXChild<'a>>) -> Expression<'a> {
        let mut lowered: Vec<Expression<'a>> = Vec::new();

        for child in children {
            match child {
                JSXChild::Element(element) => lowered.push(self.lower_element(element)),
                JSXChild::Text(text) => {
                    let collapsed = normalize_jsx_text(&text.value);
                    if !collapsed.is_empty() {
                        let text_atom = self.ast.allocator.alloc_str(&collapsed);
                        lowered.push(self.ast.expression_string_literal(SPAN, text_atom, None));
                    }
                }
                JSXChild::ExpressionContainer(container) => {
                    if let Some(expr) = container.expression.as_expression() {
                        let mut expr = expr.clone_in(self.ast.allocator);
                        self.visit_expression(&mut expr);
                        lowered.push(expr);
                    }
                }
                // Fragments and child spreads have no vnode encoding; they
                // contribute nothing.
                _ => {}
            }
        }

        if lowered.len() == 1 {
            if let Some(only) = lowered.pop() {
                return only;
            }
        }
        let mut elements = self.ast.vec();
        for expr in lowered {
            elements.push(ArrayExpressionElement::from(expr));
        }
        self.ast.expression_array(SPAN, elements)
    }

    // ─── Argument assembly ───

    #[allow(clippy::too_many_arguments)]
    fn assemble_arguments(
        &self,
        vnode_flags: u32,
        type_expr: Expression<'a>,
        class_name: Option<Expression<'a>>,
        children: Option<Expression<'a>>,
        props: Expression<'a>,
        key: Option<Expression<'a>>,
        ref_slot: Option<Expression<'a>>,
    ) -> oxc_allocator::Vec<'a, Argument<'a>> {
        let has_children = children.as_ref().is_some_and(|c| !is_empty_array(c));
        let has_props = match &props {
            Expression::ObjectExpression(object) => !object.properties.is_empty(),
            _ => false,
        };
        let has_key = key.is_some();
        let has_ref = ref_slot.is_some();

        let mut args = self.ast.vec();
        args.push(Argument::from(self.ast.expression_numeric_literal(
            SPAN,
            f64::from(vnode_flags),
            None,
            NumberBase::Decimal,
        )));
        args.push(Argument::from(type_expr));

        match class_name {
            Some(expr) => args.push(Argument::from(expr)),
            None if has_children || has_props || has_key || has_ref => {
                args.push(self.null_argument());
            }
            None => return args,
        }

        match children {
            Some(expr) if has_children => args.push(Argument::from(expr)),
            _ if has_props || has_key || has_ref => args.push(self.null_argument()),
            _ => return args,
        }

        if has_props {
            args.push(Argument::from(props));
        } else if has_key || has_ref {
            args.push(self.null_argument());
        } else {
            return args;
        }

        match key {
            Some(expr) => args.push(Argument::from(expr)),
            None if has_ref => args.push(self.null_argument()),
            None => return args,
        }

        if let Some(expr) = ref_slot {
            args.push(Argument::from(expr));
        }
        args
    }

    fn null_argument(&self) -> Argument<'a> {
        Argument::from(self.ast.expression_null_literal(SPAN))
    }

    // ─── Factory binding ───

    fn factory_callee(&self) -> Expression<'a> {
        match &self.options.pragma {
            Some(pragma) => self.dotted_expression(pragma),
            None => self.ast.expression_identifier(SPAN, FACTORY_NAME),
        }
    }

    fn dotted_expression(&self, path: &str) -> Expression<'a> {
        let mut parts = path.split('.');
        let head = parts.next().unwrap_or(path);
        let head_atom = self.ast.allocator.alloc_str(head);
        let mut expr = self.ast.expression_identifier(SPAN, head_atom);
        for part in parts {
            let part_atom = self.ast.allocator.alloc_str(part);
            expr = Expression::from(self.ast.member_expression_static(
                SPAN,
                expr,
                self.ast.identifier_name(SPAN, part_atom),
                false,
            ));
        }
        expr
    }

    fn factory_binding_statement(&self) -> Option<Statement<'a>> {
        // A configured call target is assumed to already be in scope.
        if self.options.pragma.is_some() {
            return None;
        }
        let code = match &self.options.imports {
            ImportSource::Enabled(false) => {
                format!("var {0} = {1}.{0};", FACTORY_NAME, RUNTIME_NAMESPACE)
            }
            ImportSource::Enabled(true) => {
                format!("import {{ {} }} from \"{}\";", FACTORY_NAME, DEFAULT_IMPORT_SOURCE)
            }
            ImportSource::From(source) => {
                format!("import {{ {} }} from \"{}\";", FACTORY_NAME, source)
            }
        };
        self.parse_binding_statement(&code)
    }

    /// Build the hoisted statement by parsing the snippet in the shared
    /// arena, so it can be spliced into the program being rewritten.
    fn parse_binding_statement(&self, code: &str) -> Option<Statement<'a>> {
        let source = self.ast.allocator.alloc_str(code);
        let ret = Parser::new(
            self.ast.allocator,
            source,
            SourceType::default().with_module(true),
        )
        .parse();
        let mut program = ret.program;
        program.body.pop()
    }
}

impl<'a> VisitMut<'a> for VNodeLowerer<'a> {
    fn visit_program(&mut self, program: &mut Program<'a>) {
        for (index, stmt) in program.body.iter_mut().enumerate() {
            self.stmt_index = index;
            self.visit_statement(stmt);
        }
        if let Some(index) = self.hoist_at.take() {
            if let Some(binding) = self.factory_binding_statement() {
                program.body.insert(index, binding);
            }
        }
    }

    fn visit_expression(&mut self, expr: &mut Expression<'a>) {
        if let Expression::JSXElement(element) = expr {
            let lowered = self.lower_element(element);
            *expr = lowered;
            return;
        }
        walk_expression(self, expr);
    }
}

fn attribute_name(name: &JSXAttributeName) -> String {
    match name {
        JSXAttributeName::Identifier(id) => id.name.to_string(),
        JSXAttributeName::NamespacedName(ns) => {
            format!("{}:{}", ns.namespace.name, ns.name.name)
        }
    }
}

fn is_empty_array(expr: &Expression) -> bool {
    matches!(expr, Expression::ArrayExpression(array) if array.elements.is_empty())
}
