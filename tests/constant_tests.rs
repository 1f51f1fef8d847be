use dataviz_constants::consts::{delete_flag, new_panel_from, node_type, resource_opt_type};
use dataviz_constants::registry::{self, Constant, ConstantGroup, Literal};
use dataviz_constants::{DataVizError, DeleteFlag, NodeType, PanelOrigin, ResourceOptType};
use rstest::rstest;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::{Debug, Display};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[rstest]
#[case(new_panel_from::NEW, "new")]
#[case(new_panel_from::NEW_INNER_TEMPLATE, "new_inner_template")]
#[case(new_panel_from::NEW_OUTER_TEMPLATE, "new_outer_template")]
#[case(new_panel_from::NEW_MARKET_TEMPLATE, "new_market_template")]
#[case(node_type::FOLDER, "folder")]
#[case(node_type::LEAF, "leaf")]
#[case(resource_opt_type::NEW_LEAF, "newLeaf")]
#[case(resource_opt_type::NEW_FOLDER, "newFolder")]
#[case(resource_opt_type::MOVE, "move")]
#[case(resource_opt_type::RENAME, "rename")]
#[case(resource_opt_type::COPY, "copy")]
fn test_string_literals_are_exact(#[case] actual: &str, #[case] expected: &str) {
    assert_eq!(actual, expected);
}

#[test]
fn test_delete_flag_literals() {
    assert!(delete_flag::DELETED);
    assert!(!delete_flag::AVAILABLE);
    assert!(DeleteFlag::Deleted.is_deleted());
    assert!(!DeleteFlag::Available.is_deleted());
    assert_eq!(DeleteFlag::default(), DeleteFlag::Available);
}

#[rstest]
#[case(PanelOrigin::New, "new")]
#[case(PanelOrigin::NewInnerTemplate, "new_inner_template")]
#[case(PanelOrigin::NewOuterTemplate, "new_outer_template")]
#[case(PanelOrigin::NewMarketTemplate, "new_market_template")]
fn test_panel_origin_text(#[case] origin: PanelOrigin, #[case] text: &str) {
    assert_eq!(origin.as_str(), text);
    assert_eq!(origin.to_string(), text);
    assert_eq!(text.parse::<PanelOrigin>().unwrap(), origin);
}

#[rstest]
#[case(ResourceOptType::NewLeaf, "newLeaf")]
#[case(ResourceOptType::NewFolder, "newFolder")]
#[case(ResourceOptType::Move, "move")]
#[case(ResourceOptType::Rename, "rename")]
#[case(ResourceOptType::Copy, "copy")]
fn test_resource_opt_text(#[case] opt: ResourceOptType, #[case] text: &str) {
    assert_eq!(opt.as_str(), text);
    assert_eq!(opt.to_string(), text);
    assert_eq!(text.parse::<ResourceOptType>().unwrap(), opt);
}

#[test]
fn test_node_type_text() {
    for node in NodeType::iter() {
        assert_eq!(node.to_string(), node.as_str());
    }
    assert!(NodeType::Folder.is_folder());
    assert!(!NodeType::Leaf.is_folder());
}

#[test]
fn test_create_operations_map_to_node_types() {
    assert_eq!(ResourceOptType::NewLeaf.node_type(), Some(NodeType::Leaf));
    assert_eq!(ResourceOptType::NewFolder.node_type(), Some(NodeType::Folder));
    for opt in [ResourceOptType::Move, ResourceOptType::Rename, ResourceOptType::Copy] {
        assert!(!opt.creates_node());
        assert_eq!(opt.node_type(), None);
    }
}

#[test]
fn test_template_origins() {
    let templates: Vec<_> = PanelOrigin::iter().filter(|o| o.is_template()).collect();
    assert_eq!(templates.len(), 3);
    assert!(!PanelOrigin::New.is_template());
}

fn assert_group_distinct<C: Constant>() {
    let values: Vec<String> = C::iter().map(|c| c.literal().to_string()).collect();
    let unique: HashSet<&String> = values.iter().collect();
    assert_eq!(unique.len(), values.len(), "{} has duplicates", C::GROUP);
}

#[test]
fn test_groups_are_pairwise_distinct() {
    assert_group_distinct::<PanelOrigin>();
    assert_group_distinct::<DeleteFlag>();
    assert_group_distinct::<NodeType>();
    assert_group_distinct::<ResourceOptType>();
    registry::verify_distinct().unwrap();
}

#[test]
fn test_repeated_reads_are_stable() {
    let first = registry::entries(None);
    for _ in 0..3 {
        assert_eq!(registry::entries(None), first);
    }
    assert_eq!(ResourceOptType::NewLeaf.as_str(), ResourceOptType::NewLeaf.as_str());
}

#[test]
fn test_entry_counts_per_group() {
    let counts: Vec<usize> = ConstantGroup::iter().map(|g| g.entries().len()).collect();
    assert_eq!(counts, vec![4, 2, 2, 5]);
    assert_eq!(registry::entries(None).len(), 13);
}

#[test]
fn test_lookup_by_name() {
    let entry = registry::lookup(ConstantGroup::ResourceOptType, "NEW_FOLDER").unwrap();
    assert_eq!(entry.value, Literal::Str("newFolder"));

    let entry = registry::lookup(ConstantGroup::DeleteFlag, "AVAILABLE").unwrap();
    assert_eq!(entry.value, Literal::Bool(false));

    // Names are scoped to their group.
    assert!(registry::lookup(ConstantGroup::NodeType, "NEW_LEAF").is_none());
}

#[rstest]
#[case(ConstantGroup::NewPanelFrom, "new_market_template", "NEW_MARKET_TEMPLATE")]
#[case(ConstantGroup::DeleteFlag, "true", "DELETED")]
#[case(ConstantGroup::DeleteFlag, "false", "AVAILABLE")]
#[case(ConstantGroup::NodeType, "leaf", "LEAF")]
#[case(ConstantGroup::ResourceOptType, "rename", "RENAME")]
fn test_resolve_by_value(#[case] group: ConstantGroup, #[case] raw: &str, #[case] name: &str) {
    let entry = registry::resolve(group, raw).unwrap();
    assert_eq!(entry.group, group);
    assert_eq!(entry.name, name);
}

#[test]
fn test_resolve_unknown_value() {
    let err = registry::resolve(ConstantGroup::NodeType, "Folder").unwrap_err();
    match err {
        DataVizError::UnknownValue { group, value } => {
            assert_eq!(group, ConstantGroup::NodeType);
            assert_eq!(value, "Folder");
        }
        other => panic!("unexpected error: {}", other),
    }

    // A value from another group does not leak across.
    assert!(registry::resolve(ConstantGroup::ResourceOptType, "leaf").is_err());
}

#[test]
fn test_parse_literal_error_message() {
    let err = PanelOrigin::parse_literal("market").unwrap_err();
    assert_eq!(err.to_string(), "Unknown NEW_PANEL_FROM value: 'market'");
    assert_eq!(
        DeleteFlag::parse_literal("true").unwrap(),
        DeleteFlag::Deleted
    );
}

// Display, FromStr and serde are derived separately from `consts`; they must
// all produce the same literal for every member.
fn assert_spellings_agree<C>()
where
    C: Constant + Display + FromStr + Serialize + DeserializeOwned + Debug + PartialEq,
    <C as FromStr>::Err: Debug,
{
    for c in C::iter() {
        let lit = c.literal();
        let text = lit.to_string();

        assert_eq!(c.to_string(), text, "{}.{} Display", C::GROUP, c.name());
        assert_eq!(text.parse::<C>().unwrap(), c, "{}.{} FromStr", C::GROUP, c.name());
        assert_eq!(C::parse_literal(&text).unwrap(), c);

        let stored = serde_json::to_value(c).unwrap();
        assert_eq!(stored, serde_json::to_value(lit).unwrap(), "{}.{} serde", C::GROUP, c.name());
        assert_eq!(serde_json::from_value::<C>(stored).unwrap(), c);
    }
}

#[test]
fn test_all_spellings_agree_with_consts() {
    assert_spellings_agree::<PanelOrigin>();
    assert_spellings_agree::<DeleteFlag>();
    assert_spellings_agree::<NodeType>();
    assert_spellings_agree::<ResourceOptType>();
}

#[test]
fn test_delete_flag_text_forms() {
    assert_eq!(DeleteFlag::Deleted.to_string(), "true");
    assert_eq!(DeleteFlag::Available.to_string(), "false");
    assert_eq!("true".parse::<DeleteFlag>().unwrap(), DeleteFlag::Deleted);
    assert_eq!("false".parse::<DeleteFlag>().unwrap(), DeleteFlag::Available);
    assert_eq!(serde_json::to_value(DeleteFlag::Deleted).unwrap(), serde_json::json!(true));
}
