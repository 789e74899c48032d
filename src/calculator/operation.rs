//! The fixed set of binary operations.

/// One of the four arithmetic operations the calculator knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    /// Every operation, in the order they are listed to the user.
    pub const ALL: [Operation; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Keys accepted on the command line and at the interactive prompt.
    pub const KEYS: [&'static str; 4] = ["add", "sub", "mul", "div"];

    /// Look up an operation by its short key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.key() == key)
    }

    /// Short identifier, e.g. `"add"`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Mul => "multiplication",
            Self::Div => "division",
        }
    }

    /// Symbol printed on the keypad button.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Apply the raw arithmetic. Division by zero is not guarded here,
    /// use [`super::calculate`] for that.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_registry() {
        let keys: Vec<&str> = Operation::ALL.iter().map(|op| op.key()).collect();
        assert_eq!(keys, Operation::KEYS);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Operation::from_key("add"), Some(Operation::Add));
        assert_eq!(Operation::from_key("div"), Some(Operation::Div));
        assert_eq!(Operation::from_key("pow"), None);
        assert_eq!(Operation::from_key("ADD"), None);
        assert_eq!(Operation::from_key(""), None);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operation::Sub.apply(2.0, 3.0), -1.0);
        assert_eq!(Operation::Mul.apply(2.5, 4.0), 10.0);
        assert_eq!(Operation::Div.apply(9.0, 2.0), 4.5);
    }
}
