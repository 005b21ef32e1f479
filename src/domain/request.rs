use serde_json::{Map, Value};

use crate::domain::validation::ValidationError;
use crate::domain::value::{Receiver, TemplateName};

/// Template variables, passed through to the API unmodified.
pub type Variables = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
/// A request to send a templated WhatsApp message.
pub struct SendMessage {
    receiver: Receiver,
    template_name: TemplateName,
    variables: Variables,
}

impl SendMessage {
    /// Create a request with no template variables.
    pub fn new(receiver: Receiver, template_name: TemplateName) -> Self {
        Self {
            receiver,
            template_name,
            variables: Variables::new(),
        }
    }

    /// Validate raw strings into a request.
    ///
    /// Checks run in order (receiver presence, receiver format, template name presence)
    /// and the first failure is returned.
    pub fn parse(
        receiver: impl Into<String>,
        template_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let receiver = Receiver::new(receiver)?;
        let template_name = TemplateName::new(template_name)?;
        Ok(Self::new(receiver, template_name))
    }

    /// Replace all template variables.
    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    /// Set a single template variable, overwriting an existing value for `key`.
    pub fn variable(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn receiver(&self) -> &Receiver {
        &self.receiver
    }

    pub fn template_name(&self) -> &TemplateName {
        &self.template_name
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }
}
