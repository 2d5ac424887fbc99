//! Pest grammar parser for .pack scripts

use pest::Parser;
use pest_derive::Parser;

use crate::backpack::Payload;
use crate::error::{BackpackError, Result};
use crate::parser::ast::*;

#[derive(Parser)]
#[grammar = "../grammar/backpack.pest"]
pub struct PackParser;

type Pair<'i> = pest::iterators::Pair<'i, Rule>;

/// Parse a single statement into an AST
pub fn parse_command(input: &str) -> Result<Command> {
    let pairs = PackParser::parse(Rule::command, input)
        .map_err(|e| BackpackError::ParseError(e.to_string()))?;

    let pair = pairs
        .into_iter()
        .next()
        .ok_or_else(|| BackpackError::ParseError("Empty input".to_string()))?;

    let statement = pair
        .into_inner()
        .find(|p| p.as_rule() == Rule::statement)
        .ok_or_else(|| BackpackError::ParseError("Expected statement".to_string()))?;

    parse_statement(statement)
}

/// Parse a script (multiple statements) into an AST
pub fn parse_script(input: &str) -> Result<Script> {
    let pairs = PackParser::parse(Rule::script, input)
        .map_err(|e| BackpackError::ParseError(e.to_string()))?;

    let pair = pairs
        .into_iter()
        .next()
        .ok_or_else(|| BackpackError::ParseError("Empty script".to_string()))?;

    let mut statements = Vec::new();

    for inner in pair.into_inner() {
        if inner.as_rule() == Rule::statement {
            statements.push(parse_statement(inner)?);
        }
    }

    Ok(Script { statements })
}

fn parse_statement(pair: Pair) -> Result<Command> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| BackpackError::ParseError("Expected statement content".to_string()))?;

    let rule = inner.as_rule();
    let mut parts = inner.into_inner();

    match rule {
        Rule::pack_cmd => {
            let owner = next_string(&mut parts, "owner in PACK")?;
            let value = parts
                .next()
                .ok_or_else(|| BackpackError::ParseError("Expected payload in PACK".to_string()))?;
            Ok(Command::Pack(PackCommand {
                owner,
                payload: parse_payload(value)?,
            }))
        }
        Rule::read_cmd => Ok(Command::ReadTag(next_string(&mut parts, "owner in READ TAG")?)),
        Rule::look_cmd => Ok(Command::LookIn(next_string(&mut parts, "owner in LOOK IN")?)),
        Rule::add_cmd => Ok(Command::Add(ItemCommand {
            item: next_string(&mut parts, "item in ADD")?,
            owner: next_string(&mut parts, "owner in ADD")?,
        })),
        Rule::remove_cmd => Ok(Command::Remove(ItemCommand {
            item: next_string(&mut parts, "item in REMOVE")?,
            owner: next_string(&mut parts, "owner in REMOVE")?,
        })),
        Rule::empty_cmd => Ok(Command::Empty(next_string(&mut parts, "owner in EMPTY")?)),
        Rule::list_cmd => Ok(Command::ListBackpacks),
        Rule::discard_cmd => Ok(Command::Discard(next_string(&mut parts, "owner in DISCARD")?)),
        Rule::export_cmd => Ok(Command::Export(ExportCommand {
            owner: next_string(&mut parts, "owner in EXPORT")?,
            path: next_string(&mut parts, "path in EXPORT")?,
        })),
        Rule::explain_cmd => {
            let statement = parts.next().ok_or_else(|| {
                BackpackError::ParseError("Expected statement after EXPLAIN".to_string())
            })?;
            Ok(Command::Explain(Box::new(parse_statement(statement)?)))
        }
        _ => Err(BackpackError::ParseError(format!(
            "Unexpected rule: {:?}",
            rule
        ))),
    }
}

fn next_string(parts: &mut pest::iterators::Pairs<Rule>, what: &str) -> Result<String> {
    let pair = parts
        .next()
        .ok_or_else(|| BackpackError::ParseError(format!("Expected {}", what)))?;
    parse_string(pair)
}

/// Decode a quoted string literal, escapes included
fn parse_string(pair: Pair) -> Result<String> {
    if pair.as_rule() != Rule::string {
        return Err(BackpackError::ParseError(format!(
            "Expected string, found {:?}",
            pair.as_rule()
        )));
    }
    serde_json::from_str(pair.as_str())
        .map_err(|e| BackpackError::ParseError(format!("Bad string {}: {}", pair.as_str(), e)))
}

/// Classify a payload; text that serde_json cannot decode (e.g. `1e400`) is unrecognized
fn parse_payload(pair: Pair) -> Result<Payload> {
    match serde_json::from_str(pair.as_str()) {
        Ok(value) => Ok(Payload::from_json(value)),
        Err(e) => {
            log::debug!("payload {} does not decode: {}", pair.as_str(), e);
            Ok(Payload::Unrecognized(pair.as_str().to_string()))
        }
    }
}
