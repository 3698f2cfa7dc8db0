use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{
        cafe::{CafeCreate, CafeEdit, CafeList},
        employee::{EmployeeCreate, EmployeeEdit, EmployeeList},
        Home, NotFound,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[nest("/manage")]

        #[route("/cafes")]
        CafeList {},

        #[route("/cafes/new")]
        CafeCreate {},

        #[route("/cafes/:id/edit")]
        CafeEdit { id: String },

        #[route("/employees?:cafe")]
        EmployeeList { cafe: String },

        #[route("/employees/new")]
        EmployeeCreate {},

        #[route("/employees/:id/edit")]
        EmployeeEdit { id: String },

    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
