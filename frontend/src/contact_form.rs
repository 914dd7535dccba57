use crate::components::notification::Notice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Phone, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Phone => "Phone",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "How should I address you",
            Field::Phone => "+7 (___) ___-__-__",
            Field::Message => "Tell me what brings you here",
        }
    }

    /// Checked by the browser before the form can be submitted.
    pub fn required(self) -> bool {
        !matches!(self, Field::Message)
    }
}

/// What the visitor has typed into the booking form so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Handles a submission: the request goes nowhere, the visitor gets the
    /// confirmation notice and the form starts over.
    pub fn submit(&mut self) -> Notice {
        self.reset();
        Notice::REQUEST_RECEIVED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_empty() {
        let form = ContactForm::default();
        for field in Field::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn update_touches_only_one_field() {
        let mut form = ContactForm::default();
        form.update(Field::Phone, "+70000000000");
        assert_eq!(form.phone, "+70000000000");
        assert_eq!(form.name, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn only_message_is_optional() {
        assert!(Field::Name.required());
        assert!(Field::Phone.required());
        assert!(!Field::Message.required());
    }

    #[test]
    fn submitting_a_booking_request_clears_the_form() {
        let mut form = ContactForm::default();
        form.update(Field::Name, "Anna");
        form.update(Field::Phone, "+70000000000");

        let notice = form.submit();

        assert_eq!(notice.title, "Thank you for reaching out");
        assert_eq!(notice.description, "I will contact you shortly");
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn submitting_twice_is_harmless() {
        let mut form = ContactForm::default();
        form.update(Field::Message, "Back pain after long drives");
        assert_eq!(form.submit(), form.submit());
        assert_eq!(form, ContactForm::default());
    }

    fn field() -> impl Strategy<Value = Field> {
        prop_oneof![Just(Field::Name), Just(Field::Phone), Just(Field::Message)]
    }

    proptest! {
        #[test]
        fn each_field_holds_its_last_write(writes in proptest::collection::vec((field(), ".*"), 0..32)) {
            let mut form = ContactForm::default();
            for (field, value) in &writes {
                form.update(*field, value.as_str());
            }

            for field in Field::ALL {
                let expected = writes
                    .iter()
                    .rev()
                    .find(|(f, _)| *f == field)
                    .map_or("", |(_, value)| value.as_str());
                prop_assert_eq!(form.get(field), expected);
            }
        }

        #[test]
        fn submit_always_resets(name in ".*", phone in ".*", message in ".*") {
            let mut form = ContactForm { name, phone, message };
            form.submit();
            prop_assert_eq!(form, ContactForm::default());
        }
    }
}
