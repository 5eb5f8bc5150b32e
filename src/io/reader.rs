//! Instance file parsing.

use std::fs;
use std::path::Path;

use crate::error::GapError;
use crate::instance::GapInstance;

/// Parses every instance in `input`.
///
/// The text is treated as a whitespace token stream in the format
/// documented at [the module level](crate::io). Tokens after the
/// declared number of instances are ignored.
///
/// # Errors
///
/// [`GapError::MalformedInput`] if the stream ends early or a token is
/// not a number; [`GapError::InvalidInstance`] if a parsed instance
/// fails validation (negative values, zero agent or task count).
pub fn parse_instances(input: &str) -> Result<Vec<GapInstance>, GapError> {
    let mut tokens = input.split_whitespace();
    let count = next_usize(&mut tokens, "instance count")?;
    let mut instances = Vec::with_capacity(count);
    for index in 0..count {
        instances.push(parse_instance(&mut tokens, index)?);
    }
    Ok(instances)
}

/// Reads and parses an instance file.
///
/// # Errors
///
/// [`GapError::Io`] if the file cannot be read, otherwise as
/// [`parse_instances`].
pub fn read_instances(path: impl AsRef<Path>) -> Result<Vec<GapInstance>, GapError> {
    let input = fs::read_to_string(path)?;
    parse_instances(&input)
}

fn parse_instance<'t, I>(tokens: &mut I, index: usize) -> Result<GapInstance, GapError>
where
    I: Iterator<Item = &'t str>,
{
    let num_agents = next_usize(tokens, &format!("instance {index}: agent count"))?;
    let num_tasks = next_usize(tokens, &format!("instance {index}: task count"))?;
    let costs = parse_matrix(tokens, num_agents, num_tasks, index, "cost")?;
    let resources = parse_matrix(tokens, num_agents, num_tasks, index, "resource")?;
    let mut capacities = Vec::with_capacity(num_agents);
    for agent in 0..num_agents {
        capacities.push(next_i64(
            tokens,
            &format!("instance {index}: capacity of agent {agent}"),
        )?);
    }
    GapInstance::new(num_agents, num_tasks, costs, resources, capacities)
}

fn parse_matrix<'t, I>(
    tokens: &mut I,
    num_agents: usize,
    num_tasks: usize,
    index: usize,
    name: &str,
) -> Result<Vec<Vec<i64>>, GapError>
where
    I: Iterator<Item = &'t str>,
{
    let mut matrix = Vec::with_capacity(num_agents);
    for agent in 0..num_agents {
        let mut row = Vec::with_capacity(num_tasks);
        for task in 0..num_tasks {
            row.push(next_i64(
                tokens,
                &format!("instance {index}: {name} of agent {agent}, task {task}"),
            )?);
        }
        matrix.push(row);
    }
    Ok(matrix)
}

fn next_token<'t, I>(tokens: &mut I, what: &str) -> Result<&'t str, GapError>
where
    I: Iterator<Item = &'t str>,
{
    tokens
        .next()
        .ok_or_else(|| GapError::MalformedInput(format!("unexpected end of input reading {what}")))
}

fn next_usize<'t, I>(tokens: &mut I, what: &str) -> Result<usize, GapError>
where
    I: Iterator<Item = &'t str>,
{
    let token = next_token(tokens, what)?;
    token
        .parse()
        .map_err(|e| GapError::MalformedInput(format!("bad {what}: {token:?} ({e})")))
}

fn next_i64<'t, I>(tokens: &mut I, what: &str) -> Result<i64, GapError>
where
    I: Iterator<Item = &'t str>,
{
    let token = next_token(tokens, what)?;
    token
        .parse()
        .map_err(|e| GapError::MalformedInput(format!("bad {what}: {token:?} ({e})")))
}
