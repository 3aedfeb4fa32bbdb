use keel_parser::scan_module;
use pretty_assertions::assert_eq;

const TOKEN_SOURCE: &str = r#"
blockchain BasicToken {
    state {
        uint256 totalSupply;
        mapping(address => uint256) balances;
        string name;
    }

    event Transfer(address from, address to, uint256 amount);

    constructor(string tokenName, uint256 initialSupply) {
        name = tokenName;
        totalSupply = initialSupply;
    }

    function transfer(address to, uint256 amount) {
        balances[to] += amount;
        emit Transfer(msg.sender, to, amount);
    }

    function balanceOf(address who) returns (uint256) {
        return balances[who];
    }
}
"#;

#[test]
fn scans_module_structure() {
    let module = scan_module(TOKEN_SOURCE, "basic_token");

    assert_eq!(module.name, "BasicToken");
    assert_eq!(
        module.state_names(),
        vec!["totalSupply", "balances", "name"]
    );
    assert_eq!(module.events.len(), 1);
    assert!(module.events[0].starts_with("event Transfer("));

    assert_eq!(module.functions.len(), 3);
    assert!(module.functions[0].is_constructor);
    assert!(!module.functions[1].is_constructor);
    assert_eq!(
        module.functions[1].header,
        "function transfer(address to, uint256 amount) {"
    );
}

#[test]
fn falls_back_to_file_stem_when_unnamed() {
    let source = "state {\n    uint256 counter;\n}\n";
    let module = scan_module(source, "my-module");
    assert_eq!(module.name, "my_module");
    assert_eq!(module.state_names(), vec!["counter"]);
}

#[test]
fn captures_bodies_with_nested_braces() {
    let source = r#"
function tally(uint256 n) returns (uint256) {
    let total: u256 = 0;
    for i in range(n) {
        if total > 10 {
            total += 2;
        } else {
            total += 1;
        }
    }
    return total;
}
"#;
    let module = scan_module(source, "tally");
    assert_eq!(module.functions.len(), 1);
    let body = &module.functions[0].body;
    assert_eq!(body.last().map(String::as_str), Some("}"));
    assert!(body.iter().any(|line| line.contains("for i in range(n)")));
    assert!(body.iter().any(|line| line.trim() == "} else {"));
}

#[test]
fn state_block_is_isolated_from_functions() {
    let source = r#"
state {
    uint256 x;
}
function get() returns (uint256) {
    return x;
}
"#;
    let module = scan_module(source, "m");
    assert_eq!(module.state_names(), vec!["x"]);
    assert_eq!(module.functions.len(), 1);
}

#[test]
fn empty_source_yields_empty_module() {
    let module = scan_module("", "empty");
    assert_eq!(module.name, "empty");
    assert!(module.state.is_empty());
    assert!(module.events.is_empty());
    assert!(module.functions.is_empty());
}
