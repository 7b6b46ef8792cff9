#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    SameCurrency,
    NoData,
    Historical,
    Referential,
    Output,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Critical,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn new<T: Into<String>>(kind: ErrorKind, message: T) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn new_input<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::Input, message)
    }

    pub fn new_no_data<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::NoData, message)
    }

    pub fn new_historical<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::Historical, message)
    }

    pub fn new_referential<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::Referential, message)
    }

    pub fn new_output<T: Into<String>>(message: T) -> Self {
        Self::new(ErrorKind::Output, message)
    }

    pub fn same_currency() -> Self {
        Self::new(
            ErrorKind::SameCurrency,
            "Please select different currencies for conversion.",
        )
    }

    pub fn severity(&self) -> Severity {
        match self.kind {
            ErrorKind::SameCurrency => Severity::Warning,
            _ => Severity::Critical,
        }
    }

    /// Text shown to the user when a conversion is refused or fails.
    pub fn user_message(&self) -> String {
        match self.kind {
            ErrorKind::SameCurrency => self.message.clone(),
            ErrorKind::Input | ErrorKind::NoData => format!("Value Error: {}", self.message),
            ErrorKind::Historical | ErrorKind::Referential => {
                format!("Failed to convert currency: {}", self.message)
            }
            ErrorKind::Output => format!("Failed to write output: {}", self.message),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new_output(error.to_string())
    }
}
