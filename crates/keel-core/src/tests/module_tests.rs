use crate::module::{FunctionDecl, SourceModule, StateVariable};
use crate::Mutability;

#[test]
fn test_state_names_in_declaration_order() {
    let mut module = SourceModule::new("Token");
    module.state.push(StateVariable {
        name: "totalSupply".to_string(),
        decl: "uint256 totalSupply;".to_string(),
    });
    module.state.push(StateVariable {
        name: "balances".to_string(),
        decl: "mapping(address => uint256) balances;".to_string(),
    });

    assert_eq!(module.state_names(), vec!["totalSupply", "balances"]);
}

#[test]
fn test_module_serializes_round_trip() {
    let mut module = SourceModule::new("Token");
    module.events.push("event Minted(uint256 amount);".to_string());
    module
        .functions
        .push(FunctionDecl::new("constructor() {", true));

    let json = serde_json::to_string(&module).unwrap();
    let back: SourceModule = serde_json::from_str(&json).unwrap();

    assert_eq!(back.name, "Token");
    assert_eq!(back.events.len(), 1);
    assert!(back.functions[0].is_constructor);
}

#[test]
fn test_mutability_keywords() {
    assert_eq!(Mutability::Pure.keyword(), Some("pure"));
    assert_eq!(Mutability::View.keyword(), Some("view"));
    assert_eq!(Mutability::NonPayable.keyword(), None);
}
