//! Plain-text instance reader.
//!
//! The format is a stream of whitespace-separated tokens:
//!
//! ```text
//! m n capacity
//! p_0 .. p_{m-1}            item profits
//! w_0 .. w_{n-1}            element weights
//! a_00 .. a_0{n-1}          incidence row of item 0 (1 = element required)
//! ..
//! a_{m-1}0 .. a_{m-1}{n-1}
//! ```
//!
//! Line breaks carry no meaning. Tokens after the matrix are ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use crate::models::SukpInstance;

use super::InstanceLoadError;

/// Parses an instance from its text form.
///
/// # Examples
///
/// ```
/// use u_sukp::io::parse_instance;
///
/// let text = "2 3 2\n5 3\n1 1 1\n1 1 0\n0 1 1\n";
/// let inst = parse_instance(text).unwrap();
/// assert_eq!(inst.num_items(), 2);
/// assert_eq!(inst.capacity(), 2.0);
/// assert_eq!(inst.items()[0].required_elements(), &[0, 1]);
/// ```
pub fn parse_instance(text: &str) -> Result<SukpInstance, InstanceLoadError> {
    let mut tokens = Tokens::new(text);

    let m: usize = tokens.next("item count")?;
    let n: usize = tokens.next("element count")?;
    let capacity: f64 = tokens.next("capacity")?;

    let profits = (0..m)
        .map(|i| tokens.next(&format!("profit of item {i}")))
        .collect::<Result<Vec<f64>, _>>()?;
    let weights = (0..n)
        .map(|j| tokens.next(&format!("weight of element {j}")))
        .collect::<Result<Vec<f64>, _>>()?;

    let mut incidence = Vec::with_capacity(m);
    for i in 0..m {
        let row = (0..n)
            .map(|j| tokens.next(&format!("incidence entry ({i}, {j})")))
            .collect::<Result<Vec<u8>, _>>()?;
        incidence.push(row);
    }

    let instance = SukpInstance::from_incidence(capacity, profits, weights, &incidence)?;
    log::debug!(
        "parsed instance: {} items, {} elements, capacity {}",
        instance.num_items(),
        instance.num_elements(),
        instance.capacity()
    );
    Ok(instance)
}

/// Reads and parses an instance from any reader.
pub fn read_instance<R: Read>(mut reader: R) -> Result<SukpInstance, InstanceLoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_instance(&text)
}

/// Loads an instance from a file.
pub fn load_instance(path: impl AsRef<Path>) -> Result<SukpInstance, InstanceLoadError> {
    let path = path.as_ref();
    log::info!("loading instance from {}", path.display());
    let file = File::open(path)?;
    read_instance(BufReader::new(file))
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, expected: &str) -> Result<T, InstanceLoadError> {
        let token = self
            .inner
            .next()
            .ok_or_else(|| InstanceLoadError::UnexpectedEof {
                expected: expected.to_string(),
            })?;
        token.parse().map_err(|_| InstanceLoadError::InvalidToken {
            expected: expected.to_string(),
            token: token.to_string(),
        })
    }
}
