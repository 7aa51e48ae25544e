use crate::validation::field::FieldKind;

/// How a field is labelled and rendered, and whether it must be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
    /// `(value, label)` pairs for select fields.
    pub options: &'static [(&'static str, &'static str)],
}

const fn field(
    name: &'static str,
    label: &'static str,
    kind: FieldKind,
    required: bool,
    placeholder: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind,
        required,
        placeholder,
        options: &[],
    }
}

const fn select(
    name: &'static str,
    label: &'static str,
    required: bool,
    placeholder: &'static str,
    options: &'static [(&'static str, &'static str)],
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind: FieldKind::Select,
        required,
        placeholder,
        options,
    }
}

const SERVICES: &[(&str, &str)] = &[
    ("airport-transfer", "Airport Transfer"),
    ("city-ride", "City Ride"),
    ("interstate-travel", "Interstate Travel"),
    ("corporate-shuttle", "Corporate Shuttle"),
    ("event-transport", "Event Transport"),
];

/// Vehicles offered on hire purchase, as `(value, label)` pairs.
pub const VEHICLES: &[(&str, &str)] = &[
    ("toyota-corolla", "Toyota Corolla"),
    ("toyota-camry", "Toyota Camry"),
    ("honda-accord", "Honda Accord"),
    ("toyota-hiace", "Toyota Hiace Bus"),
    ("lexus-rx", "Lexus RX 350"),
];

const EMPLOYMENT: &[(&str, &str)] = &[
    ("employed", "Employed"),
    ("self-employed", "Self-employed"),
    ("business-owner", "Business Owner"),
];

const BOOKING_FIELDS: &[FieldSpec] = &[
    field("name", "Full Name", FieldKind::Text, true, "Your full name"),
    field("phone", "Phone Number", FieldKind::Tel, true, "0803 123 4567"),
    field("email", "Email Address", FieldKind::Email, false, "you@example.com"),
    select("service", "Service", true, "Select a service", SERVICES),
    field("pickup", "Pickup Location", FieldKind::Text, true, "Where should we pick you up?"),
    field("dropoff", "Drop-off Location", FieldKind::Text, true, "Where are you going?"),
    field("date", "Date", FieldKind::Date, true, ""),
    field("time", "Time", FieldKind::Time, true, ""),
    field("notes", "Additional Notes", FieldKind::Textarea, false, "Luggage, passengers, special requests"),
];

const HIRE_PURCHASE_FIELDS: &[FieldSpec] = &[
    field("name", "Full Name", FieldKind::Text, true, "Your full name"),
    field("email", "Email Address", FieldKind::Email, true, "you@example.com"),
    field("phone", "Phone Number", FieldKind::Tel, true, "0803 123 4567"),
    select("vehicle", "Vehicle", true, "Select a vehicle", VEHICLES),
    select("employment", "Employment Status", false, "Select employment status", EMPLOYMENT),
    field("income", "Monthly Income (₦)", FieldKind::Text, false, "e.g. 350,000"),
    field("message", "Anything else we should know?", FieldKind::Textarea, false, ""),
];

const CONTACT_FIELDS: &[FieldSpec] = &[
    field("name", "Full Name", FieldKind::Text, true, "Your full name"),
    field("email", "Email Address", FieldKind::Email, true, "you@example.com"),
    field("phone", "Phone Number", FieldKind::Tel, false, "0803 123 4567"),
    field("subject", "Subject", FieldKind::Text, true, "How can we help?"),
    field("message", "Message", FieldKind::Textarea, true, "Write your message"),
];

/// The three forms on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Booking,
    HirePurchase,
    Contact,
}

impl FormKind {
    /// Stable element id of the rendered form.
    pub fn id(&self) -> &'static str {
        match self {
            FormKind::Booking => "booking-form",
            FormKind::HirePurchase => "hire-purchase-form",
            FormKind::Contact => "contact-form",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Booking => "Book a Ride",
            FormKind::HirePurchase => "Apply for Hire Purchase",
            FormKind::Contact => "Send Us a Message",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormKind::Booking => "Book Now",
            FormKind::HirePurchase => "Submit Application",
            FormKind::Contact => "Send Message",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            FormKind::Booking => BOOKING_FIELDS,
            FormKind::HirePurchase => HIRE_PURCHASE_FIELDS,
            FormKind::Contact => CONTACT_FIELDS,
        }
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields()
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.name)
    }

    /// Only the contact form re-checks the email shape when submitted; the
    /// other forms rely on the per-field check.
    pub fn checks_email_on_submit(&self) -> bool {
        matches!(self, FormKind::Contact)
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormKind::Booking => "Your booking request has been submitted successfully! We will contact you within 30 minutes to confirm your booking.",
            FormKind::HirePurchase => "Your hire purchase application has been submitted successfully! Our team will review your application and contact you within 24 hours.",
            FormKind::Contact => "Your message has been sent successfully! We will get back to you within 24 hours.",
        }
    }
}
