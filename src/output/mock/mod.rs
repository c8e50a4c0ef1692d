use crate::output::{CardOutput, Message};

#[derive(Debug, Default)]
pub struct MockCardOutput {
    messages: Vec<Message>,
}

impl MockCardOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&mut self) -> Vec<Message> {
        std::mem::replace(&mut self.messages, Vec::new())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.messages.iter().any(|m| m == message)
    }
}

impl CardOutput for MockCardOutput {
    fn say(&mut self, message: &Message) {
        self.messages.push(message.clone());
    }
}
