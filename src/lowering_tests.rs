#[cfg(test)]
mod tests {
    use crate::compile::{compile_jsx_internal, ImportSource, LowerOptions};
    use oxc_allocator::Allocator;
    use oxc_codegen::Codegen;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    /// Round-trip plain JS through the same printer the pipeline uses, so
    /// expected values do not depend on formatting details.
    fn printed(code: &str) -> String {
        let allocator = Allocator::default();
        let source_type = SourceType::default().with_module(true).with_jsx(true);
        let ret = Parser::new(&allocator, code, source_type).parse();
        assert!(ret.errors.is_empty(), "expected snippet failed to parse");
        Codegen::new().build(&ret.program).code
    }

    fn lower_with(source: &str, options: &LowerOptions) -> String {
        compile_jsx_internal(source, "test.jsx", options)
            .expect("lowering failed")
            .code
    }

    /// Default test configuration mirrors the build pipeline: import-style
    /// hoisting from the default module source.
    fn lower(source: &str) -> String {
        lower_with(
            source,
            &LowerOptions {
                pragma: None,
                imports: ImportSource::Enabled(true),
            },
        )
    }

    // ─── Basic scenarios ───

    #[test]
    fn test_transforms_empty_div() {
        assert_eq!(
            lower("<div></div>"),
            printed(r#"import { V } from "soot"; V(1, "div");"#)
        );
    }

    #[test]
    fn test_transforms_single_text_child() {
        assert_eq!(
            lower("<div>1</div>"),
            printed(r#"import { V } from "soot"; V(1, "div", null, "1");"#)
        );
    }

    #[test]
    fn test_class_name_is_third_argument_on_elements() {
        assert_eq!(
            lower(r#"<div className="first second">1</div>"#),
            printed(r#"import { V } from "soot"; V(1, "div", "first second", "1");"#)
        );
    }

    #[test]
    fn test_class_name_is_a_prop_on_components() {
        assert_eq!(
            lower(r#"<UnknownClass className="first second">1</UnknownClass>"#),
            printed(
                r#"import { V } from "soot";
                V(8, UnknownClass, null, null, { "className": "first second", children: "1" });"#
            )
        );
    }

    #[test]
    fn test_class_alias_with_expression_value() {
        assert_eq!(
            lower("<div class={variable}>1</div>"),
            printed(r#"import { V } from "soot"; V(1, "div", variable, "1");"#)
        );
    }

    #[test]
    fn test_events_land_in_props() {
        assert_eq!(
            lower(r#"<div id="test" onClick={func} class={variable}>1</div>"#),
            printed(
                r#"import { V } from "soot";
                V(1, "div", variable, "1", { "id": "test", "onClick": func });"#
            )
        );
    }

    #[test]
    fn test_html_for_becomes_for_on_elements() {
        assert_eq!(
            lower("<label htmlFor={id}><input id={id} type=\"number\"/></label>"),
            printed(
                r#"import { V } from "soot";
                V(1, "label", null, V(32, "input", null, null, { "id": id, "type": "number" }), { "for": id });"#
            )
        );
    }

    #[test]
    fn test_html_for_is_untouched_on_components() {
        assert_eq!(
            lower("<Comp htmlFor={id}></Comp>"),
            printed(
                r#"import { V } from "soot";
                V(8, Comp, null, null, { "htmlFor": id });"#
            )
        );
    }

    #[test]
    fn test_bare_attribute_defaults_to_true() {
        assert_eq!(
            lower("<input disabled/>"),
            printed(r#"import { V } from "soot"; V(32, "input", null, null, { "disabled": true });"#)
        );
    }

    #[test]
    fn test_media_tag_falls_back_to_host_element() {
        assert_eq!(
            lower("<media></media>"),
            printed(r#"import { V } from "soot"; V(1, "media");"#)
        );
    }

    // ─── Special slots and elision ───

    #[test]
    fn test_key_only_pads_interior_slots() {
        assert_eq!(
            lower("<div key={k}></div>"),
            printed(r#"import { V } from "soot"; V(1, "div", null, null, null, k);"#)
        );
    }

    #[test]
    fn test_ref_only_pads_interior_slots() {
        assert_eq!(
            lower("<div ref={r}></div>"),
            printed(r#"import { V } from "soot"; V(1, "div", null, null, null, null, r);"#)
        );
    }

    #[test]
    fn test_key_and_ref_together() {
        assert_eq!(
            lower("<div key={k} ref={r}></div>"),
            printed(r#"import { V } from "soot"; V(1, "div", null, null, null, k, r);"#)
        );
    }

    #[test]
    fn test_null_child_is_still_a_child() {
        // A user-written null is a present child, unlike an absent slot.
        assert_eq!(
            lower("<div>{null}</div>"),
            printed(r#"import { V } from "soot"; V(1, "div", null, null);"#)
        );
    }

    #[test]
    fn test_spread_attribute_passes_through_in_order() {
        assert_eq!(
            lower(r#"<div {...rest} id="a"></div>"#),
            printed(r#"import { V } from "soot"; V(1, "div", null, null, { ...rest, "id": "a" });"#)
        );
    }

    // ─── Components ───

    #[test]
    fn test_component_children_fold_into_props() {
        assert_eq!(
            lower("<Comp><span>1</span></Comp>"),
            printed(
                r#"import { V } from "soot";
                V(8, Comp, null, null, { children: V(1, "span", null, "1") });"#
            )
        );
    }

    #[test]
    fn test_component_without_children_leaves_props_alone() {
        assert_eq!(
            lower("<Comp></Comp>"),
            printed(r#"import { V } from "soot"; V(8, Comp);"#)
        );
        assert_eq!(
            lower("<Comp>\n  </Comp>"),
            printed(r#"import { V } from "soot"; V(8, Comp);"#)
        );
    }

    #[test]
    fn test_member_expression_component() {
        assert_eq!(
            lower("<Widgets.Button></Widgets.Button>"),
            printed(r#"import { V } from "soot"; V(8, Widgets.Button);"#)
        );
    }

    #[test]
    fn test_component_hooks_accumulate_into_ref_bag() {
        assert_eq!(
            lower("<Comp onComponentDidMount={f} onComponentWillUnmount={g}></Comp>"),
            printed(
                r#"import { V } from "soot";
                V(8, Comp, null, null, null, null, { "onComponentDidMount": f, "onComponentWillUnmount": g });"#
            )
        );
    }

    #[test]
    fn test_later_ref_overwrites_hook_bag() {
        assert_eq!(
            lower("<Comp onComponentDidMount={f} ref={r}></Comp>"),
            printed(r#"import { V } from "soot"; V(8, Comp, null, null, null, null, r);"#)
        );
    }

    #[test]
    fn test_component_hook_name_on_element_is_generic() {
        assert_eq!(
            lower("<div onComponentDidMount={f}></div>"),
            printed(
                r#"import { V } from "soot";
                V(1, "div", null, null, { "onComponentDidMount": f });"#
            )
        );
    }

    // ─── SVG compatibility table ───

    #[test]
    fn test_xlink_href_rewrite() {
        assert_eq!(
            lower(r##"<svg><use xlinkHref="#tester"></use></svg>"##),
            printed(
                r##"import { V } from "soot";
                V(16, "svg", null, V(1, "use", null, null, { "xlink:href": "#tester" }));"##
            )
        );
    }

    #[test]
    fn test_stroke_width_rewrite() {
        assert_eq!(
            lower(r#"<svg><rect strokeWidth="1px"></rect></svg>"#),
            printed(
                r#"import { V } from "soot";
                V(16, "svg", null, V(1, "rect", null, null, { "stroke-width": "1px" }));"#
            )
        );
    }

    #[test]
    fn test_fill_opacity_rewrite() {
        assert_eq!(
            lower(r#"<svg><rect fillOpacity="1"></rect></svg>"#),
            printed(
                r#"import { V } from "soot";
                V(16, "svg", null, V(1, "rect", null, null, { "fill-opacity": "1" }));"#
            )
        );
    }

    #[test]
    fn test_compat_name_on_component_passes_through() {
        assert_eq!(
            lower(r#"<Comp strokeWidth="1px"></Comp>"#),
            printed(r#"import { V } from "soot"; V(8, Comp, null, null, { "strokeWidth": "1px" });"#)
        );
    }

    // ─── Children and whitespace ───

    #[test]
    fn test_indented_text_collapses() {
        assert_eq!(
            lower("<div>\n  Hello\n  world\n</div>"),
            printed(r#"import { V } from "soot"; V(1, "div", null, "Hello world");"#)
        );
    }

    #[test]
    fn test_whitespace_between_elements_vanishes() {
        assert_eq!(
            lower("<div><span></span>\n  <span></span></div>"),
            printed(
                r#"import { V } from "soot";
                V(1, "div", null, [V(1, "span"), V(1, "span")]);"#
            )
        );
    }

    #[test]
    fn test_empty_expression_container_is_dropped() {
        assert_eq!(
            lower("<div>{}</div>"),
            printed(r#"import { V } from "soot"; V(1, "div");"#)
        );
    }

    #[test]
    fn test_jsx_inside_expression_child_is_lowered() {
        assert_eq!(
            lower("<div>{cond ? <span></span> : null}</div>"),
            printed(
                r#"import { V } from "soot";
                V(1, "div", null, cond ? V(1, "span") : null);"#
            )
        );
    }

    // ─── Hoisting ───

    #[test]
    fn test_import_hoisted_before_originating_statement() {
        assert_eq!(
            lower("const a = 1;\nconst b = <div></div>;"),
            printed(
                r#"const a = 1;
                import { V } from "soot";
                const b = V(1, "div");"#
            )
        );
    }

    #[test]
    fn test_import_hoisted_once_for_many_elements() {
        let code = lower("const a = <div></div>;\nconst b = <span></span>;");
        assert_eq!(code.matches("import { V } from \"soot\"").count(), 1);
        assert_eq!(
            code,
            printed(
                r#"import { V } from "soot";
                const a = V(1, "div");
                const b = V(1, "span");"#
            )
        );
    }

    #[test]
    fn test_custom_import_source() {
        assert_eq!(
            lower_with(
                "<div></div>",
                &LowerOptions {
                    pragma: None,
                    imports: ImportSource::From("soot/compat".to_string()),
                },
            ),
            printed(r#"import { V } from "soot/compat"; V(1, "div");"#)
        );
    }

    #[test]
    fn test_default_hoist_aliases_runtime_namespace() {
        assert_eq!(
            lower_with("<div></div>", &LowerOptions::default()),
            printed(r#"var V = soot.V; V(1, "div");"#)
        );
    }

    #[test]
    fn test_pragma_replaces_callee_and_suppresses_hoist() {
        let options = LowerOptions {
            pragma: Some("t.some".to_string()),
            imports: ImportSource::Enabled(false),
        };
        assert_eq!(
            lower_with("<div></div>", &options),
            printed(r#"t.some(1, "div");"#)
        );
    }

    #[test]
    fn test_pragma_wins_over_imports() {
        let options = LowerOptions {
            pragma: Some("t.some".to_string()),
            imports: ImportSource::Enabled(true),
        };
        let code = lower_with("const a = <div></div>;\nconst b = <div></div>;", &options);
        assert!(!code.contains("import"));
    }

    #[test]
    fn test_jsx_inside_function_hoists_at_top() {
        assert_eq!(
            lower("function render() { return <div></div>; }"),
            printed(
                r#"import { V } from "soot";
                function render() { return V(1, "div"); }"#
            )
        );
    }
}
