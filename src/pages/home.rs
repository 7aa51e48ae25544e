use yew::prelude::*;

use crate::components::form_view::FormView;
use crate::forms::definitions::{FormKind, VEHICLES};

struct Service {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        icon: "fas fa-plane-departure",
        title: "Airport Transfers",
        blurb: "On-time pickups and drop-offs at Murtala Muhammed and every major airport.",
    },
    Service {
        icon: "fas fa-city",
        title: "City Rides",
        blurb: "Clean, air-conditioned cars for errands, meetings and nights out.",
    },
    Service {
        icon: "fas fa-road",
        title: "Interstate Travel",
        blurb: "Comfortable long-distance trips with experienced drivers.",
    },
    Service {
        icon: "fas fa-briefcase",
        title: "Corporate Shuttles",
        blurb: "Scheduled staff transport and executive chauffeurs for your business.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing">
            <style>
                {r#"
                    .landing section {
                        padding: 4rem 1.5rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .hero {
                        text-align: center;
                    }
                    .hero h1 {
                        font-size: 2.5rem;
                        color: #1e40af;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }
                    .service-item,
                    .vehicle-item {
                        padding: 1.5rem;
                        border-radius: 12px;
                        background: #f8fafc;
                    }
                    .site-form {
                        max-width: 640px;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .form-group {
                        display: flex;
                        flex-direction: column;
                    }
                    .form-group input,
                    .form-group select,
                    .form-group textarea {
                        padding: 0.75rem;
                        border: 1px solid #d1d5db;
                        border-radius: 8px;
                    }
                    .form-group input.error,
                    .form-group select.error,
                    .form-group textarea.error {
                        border-color: #dc2626 !important;
                        box-shadow: 0 0 0 3px rgba(220, 38, 38, 0.1);
                    }
                    .form-group .required {
                        color: #dc2626;
                    }
                    .error-message {
                        color: #dc2626;
                        font-size: 0.875rem;
                        margin-top: 0.25rem;
                    }
                    .btn-primary {
                        padding: 0.9rem 1.5rem;
                        border: none;
                        border-radius: 8px;
                        background: #1e40af;
                        color: white;
                        cursor: pointer;
                    }
                    .btn-primary:disabled {
                        opacity: 0.7;
                        cursor: wait;
                    }
                "#}
            </style>

            <section id="home" class="hero">
                <h1>{"Reliable Rides Across Nigeria"}</h1>
                <p>{"Book a ride in minutes, or drive away in your own car with flexible hire purchase."}</p>
                <a href="#booking" class="btn btn-primary">{"Book a Ride"}</a>
            </section>

            <section id="services">
                <h2>{"Our Services"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="service-item">
                            <i class={service.icon}></i>
                            <h3>{service.title}</h3>
                            <p>{service.blurb}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="fleet">
                <h2>{"Our Fleet"}</h2>
                <div class="services-grid">
                    { for VEHICLES.iter().map(|(value, label)| html! {
                        <div class="vehicle-item" key={*value}>
                            <i class="fas fa-car"></i>
                            <h3>{*label}</h3>
                            <a href="#hire-purchase">{"Available on hire purchase"}</a>
                        </div>
                    }) }
                </div>
            </section>

            <section id="booking">
                <h2>{"Book Your Ride"}</h2>
                <FormView kind={FormKind::Booking} />
            </section>

            <section id="hire-purchase">
                <h2>{"Hire Purchase"}</h2>
                <p>{"Own a vehicle with a small deposit and monthly payments that fit your income."}</p>
                <FormView kind={FormKind::HirePurchase} />
            </section>

            <section id="contact">
                <h2>{"Contact Us"}</h2>
                <FormView kind={FormKind::Contact} />
            </section>
        </div>
    }
}
