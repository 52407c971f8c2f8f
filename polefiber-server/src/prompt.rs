//! Interactive per-connection installation choice

use std::io::{BufRead, Write};

use polefiber_core::{Coordinate, InstallationMethod, haversine_distance};

use crate::error::CliError;

/// Asks, for every consecutive pair of poles, whether the run is aerial.
///
/// "yes" selects aerial and "no" underground; anything else asks again.
pub fn prompt_methods<R: BufRead, W: Write>(
    points: &[Coordinate],
    mut input: R,
    mut output: W,
) -> Result<Vec<InstallationMethod>, CliError> {
    let mut methods = Vec::with_capacity(points.len().saturating_sub(1));

    for (idx, pair) in points.windows(2).enumerate() {
        let distance = haversine_distance(pair[0], pair[1]);
        loop {
            write!(
                output,
                "Will the connection between Pole {} and Pole {} ({distance:.2} m) be aerial? [y = aerial / n = underground]: ",
                idx + 1,
                idx + 2
            )
            .map_err(CliError::Prompt)?;
            output.flush().map_err(CliError::Prompt)?;

            let mut answer = String::new();
            if input.read_line(&mut answer).map_err(CliError::Prompt)? == 0 {
                return Err(CliError::Prompt(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    "input ended before every connection had a method",
                )));
            }

            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" | "s" | "si" | "sí" => {
                    methods.push(InstallationMethod::Aerial);
                    break;
                }
                "n" | "no" => {
                    methods.push(InstallationMethod::Underground);
                    break;
                }
                _ => writeln!(output, "Please answer y or n.").map_err(CliError::Prompt)?,
            }
        }
    }

    Ok(methods)
}
