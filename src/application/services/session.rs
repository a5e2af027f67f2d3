//! Interactive factor-ring session
//!
//! Reads a modulus `f(x)` until an irreducible one is given, then two ring
//! elements, then runs menu operations until the user exits or input ends.

use tracing::{debug, info};

use crate::application::services::calculator::CalculatorService;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{FactorRingElement, ModInt, Polynomial};
use crate::infrastructure::traits::Console;

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose `0. Exit`.
    Exited,
    /// Input ran out before the user exited.
    EndOfInput,
}

const MENU: [&str; 8] = [
    "Choose operation:",
    "1. A + B",
    "2. A - B",
    "3. A * B",
    "4. A / B",
    "5. Inverse element A",
    "6. A^n (exponentiation)",
    "0. Exit",
];

pub struct RingSession<'a, const P: u32> {
    console: &'a mut dyn Console,
    calculator: CalculatorService<P>,
}

type Element<const P: u32> = FactorRingElement<ModInt<P>>;

impl<'a, const P: u32> RingSession<'a, P> {
    pub fn new(console: &'a mut dyn Console, calculator: CalculatorService<P>) -> Self {
        Self {
            console,
            calculator,
        }
    }

    fn say(&mut self, line: &str) -> ApplicationResult<()> {
        self.console
            .write_line(line)
            .map_err(|e| ApplicationError::OperationFailed {
                context: "write to console".to_string(),
                source: Box::new(e),
            })
    }

    fn ask(&mut self, prompt: &str) -> ApplicationResult<Option<String>> {
        let line = self
            .console
            .read_line(prompt)
            .map_err(|e| ApplicationError::OperationFailed {
                context: "read from console".to_string(),
                source: Box::new(e),
            })?;
        Ok(line.map(|l| l.trim().to_string()))
    }

    pub fn run(&mut self) -> ApplicationResult<SessionEnd> {
        info!(prime = P, "starting factor ring session");
        self.say(&format!("Factor ring operations over field Z{P}:"))?;

        let Some(f) = self.read_modulus()? else {
            return Ok(SessionEnd::EndOfInput);
        };
        let n = f.degree().unwrap_or(0);
        self.say(&format!("You entered a polynomial f(x) = {f} degree {n}."))?;

        let Some(a) = self.read_element(&f, "Enter the first element of the quotient ring")? else {
            return Ok(SessionEnd::EndOfInput);
        };
        let Some(b) = self.read_element(&f, "Enter the second element of the quotient ring")? else {
            return Ok(SessionEnd::EndOfInput);
        };
        self.say(&format!("Element A = {a}"))?;
        self.say(&format!("Element B = {b}"))?;

        self.menu_loop(&a, &b)
    }

    fn read_modulus(&mut self) -> ApplicationResult<Option<Polynomial<ModInt<P>>>> {
        loop {
            let Some(input) =
                self.ask("Enter the polynomial f(x) (coefficients as constant term first): ")?
            else {
                return Ok(None);
            };
            match self.calculator.modulus(&input) {
                Ok(f) => return Ok(Some(f)),
                Err(ApplicationError::ReducibleModulus { .. }) => self.say(&format!(
                    "The polynomial f(x) is reducible over Z{P}. Please enter an irreducible polynomial."
                ))?,
                Err(e) => self.say(&format!("Error: {e}"))?,
            }
        }
    }

    fn read_element(
        &mut self,
        f: &Polynomial<ModInt<P>>,
        prompt: &str,
    ) -> ApplicationResult<Option<Element<P>>> {
        let max = f.degree().unwrap_or(0);
        loop {
            let Some(input) = self.ask(&format!("{prompt} (max {max} coefficients): "))? else {
                return Ok(None);
            };
            match self.calculator.element(f, &input) {
                Ok(element) => return Ok(Some(element)),
                Err(ApplicationError::ElementTooLarge { max, .. }) => self.say(&format!(
                    "Error: the number of coefficients should not exceed {max}."
                ))?,
                Err(e) => self.say(&format!("Error: {e}"))?,
            }
        }
    }

    fn menu_loop(&mut self, a: &Element<P>, b: &Element<P>) -> ApplicationResult<SessionEnd> {
        loop {
            for line in MENU {
                self.say(line)?;
            }
            let Some(choice) = self.ask("Your choice: ")? else {
                return Ok(SessionEnd::EndOfInput);
            };
            debug!(choice, "menu selection");

            let line = match choice.as_str() {
                "0" => return Ok(SessionEnd::Exited),
                "1" => describe("A + B", a.try_add(b), "Error"),
                "2" => describe("A - B", a.try_sub(b), "Error"),
                "3" => describe("A * B", a.try_mul(b), "Error"),
                "4" => describe("A / B", a.try_div(b), "Division error"),
                "5" => describe(
                    "Inverse element A",
                    a.inverse(),
                    "Error when calculating the inverse element",
                ),
                "6" => {
                    let Some(exp) = self.ask("Enter a non-negative integer power: ")? else {
                        return Ok(SessionEnd::EndOfInput);
                    };
                    match exp.parse::<u32>() {
                        Ok(n) => describe(&format!("A^{n}"), a.pow(n), "Error"),
                        Err(_) => format!("Error: '{exp}' is not a non-negative integer"),
                    }
                }
                _ => "Unknown operation!".to_string(),
            };
            self.say(&line)?;
        }
    }
}

fn describe<T: std::fmt::Display, E: std::fmt::Display>(
    label: &str,
    result: Result<T, E>,
    failure: &str,
) -> String {
    match result {
        Ok(value) => format!("{label} = {value}"),
        Err(e) => format!("{failure}: {e}"),
    }
}
