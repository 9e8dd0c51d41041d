//! Integration tests for declaration construction and exporter registration.

use bindspec::prelude::*;
use bindspec::{AttributeValue, DeclKind, ExportError, Exporter, RegistrationError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn string_attr(info: &impl AsRef<InfoProxy>, name: &str) -> Option<String> {
    info.as_ref().get(name).and_then(AttributeValue::into_string)
}

// =============================================================================
// Identity Attributes
// =============================================================================

#[test]
fn class_sets_identity_attributes() {
    init_logging();
    let mut session = Session::default();
    let class = ClassInfo::new(&mut session, "geo::Point", "point.h").unwrap();

    assert_eq!(string_attr(&class, "name").as_deref(), Some("geo::Point"));
    assert_eq!(string_attr(&class, "include").as_deref(), Some("point.h"));
    assert_eq!(class.proxy().get("exclude"), Some(AttributeValue::Bool(false)));
}

#[test]
fn function_sets_identity_attributes() {
    let mut session = Session::default();
    let function = FunctionInfo::new(&mut session, "geo::distance", "point.h").unwrap();

    assert_eq!(string_attr(&function, "name").as_deref(), Some("geo::distance"));
    assert_eq!(function.proxy().get("exclude"), Some(false.into()));
}

#[test]
fn enum_has_exclude_flag_and_var_does_not() {
    let mut session = Session::default();
    let color = EnumInfo::new(&mut session, "Color", "color.h").unwrap();
    let count = VarInfo::new(&mut session, "instance_count", "counter.h").unwrap();

    assert_eq!(color.proxy().get("exclude"), Some(false.into()));
    assert_eq!(string_attr(&count, "name").as_deref(), Some("instance_count"));
    assert_eq!(count.proxy().get("exclude"), None);
}

#[test]
fn include_and_header_have_no_name() {
    let mut session = Session::default();
    let include = IncludeInfo::new(&mut session, "support.h").unwrap();
    let header = HeaderInfo::new(&mut session, "everything.h").unwrap();

    for info in [include.proxy(), header.proxy()] {
        assert_eq!(info.get("name"), None);
        assert_eq!(info.get("exclude"), None);
        info.info().with_node(|node| {
            assert_eq!(node.attribute_names().collect::<Vec<_>>(), vec!["include"]);
        });
    }
    assert_eq!(string_attr(&header, "include").as_deref(), Some("everything.h"));
}

// =============================================================================
// Inheritance
// =============================================================================

#[test]
fn identity_attributes_override_inherited_ones() {
    let mut session = Session::default();
    let base = ClassInfo::new(&mut session, "Base", "base.h").unwrap();
    exclude(&base);
    rename(&base, "PyBase");

    let derived = ClassInfo::with_options(
        &mut session,
        "Derived",
        "derived.h",
        DeclOptions::new().inherit(base.info()),
    )
    .unwrap();

    assert_eq!(derived.proxy().get("exclude"), Some(false.into()));
    assert_eq!(string_attr(&derived, "name").as_deref(), Some("Derived"));
    assert_eq!(string_attr(&derived, "include").as_deref(), Some("derived.h"));
    assert_eq!(string_attr(&derived, "rename").as_deref(), Some("PyBase"));
}

#[test]
fn inherited_tree_is_a_deep_copy() {
    let mut session = Session::default();
    let base = FunctionInfo::new(&mut session, "compute", "math.h").unwrap();
    set_wrapper(&base.child("int").unwrap(), "compute_int_wrapper");

    let copy = FunctionInfo::with_options(
        &mut session,
        "compute2",
        "math.h",
        DeclOptions::new().inherit(base.info()),
    )
    .unwrap();

    let base_overload = base.child("int").unwrap();
    let copy_overload = copy.child("int").unwrap();
    assert!(!copy_overload.info().ptr_eq(base_overload.info()));
    assert_eq!(base_overload.get("wrapper"), copy_overload.get("wrapper"));

    exclude(&copy_overload);
    set_wrapper(&copy_overload, WrapperSpec::with_code("w", "void w();"));
    assert_eq!(base_overload.get("exclude"), None);
    assert_eq!(
        base_overload.get("wrapper"),
        Some(AttributeValue::Wrapper(WrapperSpec::new("compute_int_wrapper")))
    );

    exclude(&base_overload);
    base.child("new_child").unwrap();
    assert_eq!(copy.child("int").unwrap().get("exclude"), Some(true.into()));
    assert!(copy.info().existing_child("new_child").is_none());
}

#[test]
fn tail_reaches_exporter_verbatim() {
    let mut session = Session::default();
    let tail = "// keep me\nvoid helper() {}\n";
    FunctionInfo::with_options(&mut session, "helper", "h.h", DeclOptions::new().tail(tail))
        .unwrap();

    assert_eq!(session.registry().last().and_then(|e| e.tail()), Some(tail));
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn every_construction_registers_one_exporter_in_order() {
    let mut session = Session::default();
    ClassInfo::new(&mut session, "A", "a.h").unwrap();
    FunctionInfo::new(&mut session, "f", "a.h").unwrap();
    IncludeInfo::new(&mut session, "b.h").unwrap();
    EnumInfo::new(&mut session, "E", "a.h").unwrap();
    HeaderInfo::new(&mut session, "c.h").unwrap();
    VarInfo::new(&mut session, "v", "a.h").unwrap();

    let kinds: Vec<_> = session.exporters().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            DeclKind::Class,
            DeclKind::Function,
            DeclKind::Include,
            DeclKind::Enum,
            DeclKind::Header,
            DeclKind::Var,
        ]
    );
}

#[test]
fn exporter_sees_later_mutations() {
    let mut session = Session::default();
    let class = ClassInfo::new(&mut session, "Widget", "widget.h").unwrap();
    rename(&class, "PyWidget");
    exclude(&class.child("internal").unwrap());

    let exporter = session.registry().get(0).unwrap();
    assert!(exporter.info().info().ptr_eq(class.info()));
    assert_eq!(
        exporter.info().get("rename"),
        Some(AttributeValue::from("PyWidget"))
    );
    assert_eq!(
        exporter.info().child("internal").unwrap().get("exclude"),
        Some(true.into())
    );
}

#[test]
fn failed_exporter_leaves_declaration_unregistered() {
    let mut session = Session::with_factory(
        SessionConfig::default(),
        |kind: DeclKind, info: InfoProxy, tail: Option<String>| -> Result<Box<dyn Exporter>, ExportError> {
            if kind == DeclKind::Var {
                return Err(ExportError::rejected(kind, "variables are not supported"));
            }
            Ok(Box::new(bindspec::DeferredExporter::new(kind, info, tail)))
        },
    );

    ClassInfo::new(&mut session, "A", "a.h").unwrap();
    let err = VarInfo::new(&mut session, "v", "a.h").unwrap_err();

    assert_eq!(
        err,
        RegistrationError::Export(ExportError::rejected(
            DeclKind::Var,
            "variables are not supported"
        ))
    );
    assert_eq!(session.registry().len(), 1);
}

#[test]
fn reserved_child_names_fail() {
    let mut session = Session::default();
    let class = ClassInfo::new(&mut session, "A", "a.h").unwrap();
    add_method(&class, "extra", None);

    assert!(matches!(
        class.child("__added__"),
        Err(bindspec::InfoError::ReservedName { .. })
    ));
    class
        .info()
        .with_node(|node| assert_eq!(node.child_count(), 0));
}
