use keel_emit::{emit, EmitError, Target};
use keel_parser::scan_module;

const TOKEN: &str = r#"blockchain BasicToken {
    state {
        uint256 totalSupply;
        mapping(address => uint256) balances;
        string name;
    }

    event Transfer(address from, address to, uint256 amount);

    constructor(string tokenName, u256 initialSupply) {
        name = tokenName;
        totalSupply = initialSupply;
    }

    function transfer(address to, u256 amount) {
        balances[to] += amount;
        emit Transfer(msg.sender, to, amount);
    }

    function balanceOf(address who) returns (u256) {
        return balances[who];
    }
}
"#;

#[test]
fn emits_complete_token_contract() {
    let module = scan_module(TOKEN, "basic_token");
    let solidity = emit(&module, Target::Evm).unwrap();

    insta::assert_snapshot!(solidity, @r###"
// SPDX-License-Identifier: MIT
pragma solidity ^0.8.20;

// Generated by the Keel compiler; review before deployment.
contract BasicToken {
    uint256 totalSupply; // [keel state]
    mapping(address => uint256) balances; // [keel state]
    string name; // [keel state]
    event Transfer(address from, address to, uint256 amount);

    constructor(string memory tokenName, uint256 initialSupply) {
        name = tokenName;
        totalSupply = initialSupply;
    }

    function transfer(address to, uint256 amount) public {
        balances[to] += amount;
        emit Transfer(msg.sender, to, amount);
    }

    function balanceOf(address who) public view returns (uint256) {
        return balances[who];
    }
}
"###);
}

#[test]
fn emits_desugared_loops_and_length_calls() {
    let source = r#"state {
    uint256[] entries;
}

function sum(u256[] xs) returns (u256) {
    let total: u256 = 0;
    for i in range(len(xs)) {
        total += xs[i];
    }
    return total;
}

function capacity() returns (u256) {
    return len(entries);
}
"#;
    let module = scan_module(source, "ledger");
    let solidity = emit(&module, Target::Evm).unwrap();

    insta::assert_snapshot!(solidity, @r###"
// SPDX-License-Identifier: MIT
pragma solidity ^0.8.20;

// Generated by the Keel compiler; review before deployment.
contract ledger {
    uint256[] entries; // [keel state]

    function sum(uint256[] memory xs) public pure returns (uint256) {
        uint256 total = 0;
        for i in range(xs.length) {
            total += xs[i];
        }
        return total;
    }

    function capacity() public view returns (uint256) {
        return entries.length;
    }
}
"###);
}

#[test]
fn emits_counted_loop_with_literal_bounds() {
    let source = r#"function countdown() returns (u256) {
    let hits: u256 = 0;
    for i in range(10, 0, -2) {
        hits += 1;
    }
    for j in range(5) {
        hits += 1;
    }
    return hits;
}
"#;
    let module = scan_module(source, "loops");
    let solidity = emit(&module, Target::Evm).unwrap();

    assert!(solidity.contains("for (int256 i = 10; i > 0; i -= 2) {"));
    assert!(solidity.contains("for (uint256 j = 0; j < 5; j += 1) {"));
}

#[test]
fn flattens_tuple_returns_and_normalizes_conditionals() {
    let source = r#"function minmax(u256 a, u256 b) returns ((u256, u256), bool) {
    if a < b {
        return ((a, b), true);
    }
    return ((b, a), false);
}
"#;
    let module = scan_module(source, "pairs");
    let solidity = emit(&module, Target::Evm).unwrap();

    assert!(solidity
        .contains("function minmax(uint256 a, uint256 b) public pure returns (uint256, uint256, bool) {"));
    assert!(solidity.contains("    if (a < b) {"));
    assert!(solidity.contains("return (a, b, true);"));
    assert!(solidity.contains("return (b, a, false);"));
}

#[test]
fn cosmos_target_is_reported_unsupported() {
    let module = scan_module(TOKEN, "basic_token");
    let err = emit(&module, Target::Cosmos).unwrap_err();
    assert!(matches!(err, EmitError::UnsupportedTarget(ref t) if t == "cosmos"));
}
