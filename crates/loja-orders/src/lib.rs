//! # loja-orders: Order Service Layer
//!
//! Creates, stores and reports orders on top of the pure rules in `loja-core`.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         loja-orders                                     │
//! │                                                                         │
//! │  ┌───────────────────────────────────────────────────────────────────┐ │
//! │  │                       OrderService                                │ │
//! │  │  create_order(customer, lines, strategy) ──► Arc<Order>           │ │
//! │  │  list_orders() ──► Vec<OrderReport>                               │ │
//! │  └───────┬───────────────────┬─────────────────────────┬─────────────┘ │
//! │          │                   │                         │               │
//! │          ▼                   ▼                         ▼               │
//! │  ┌──────────────┐   ┌──────────────────┐   ┌──────────────────────┐   │
//! │  │ OrderFactory │   │ OrderRepository  │   │    ActivityLog       │   │
//! │  │ ──────────── │   │ ──────────────── │   │ ──────────────────── │   │
//! │  │ IdSequence   │   │ Mutex<Vec<..>>   │   │ Tracing / Console /  │   │
//! │  │ Clock        │   │ append + list    │   │ Memory               │   │
//! │  └──────────────┘   └──────────────────┘   └──────────────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY: the id sequence and the repository are Mutex-guarded;  │
//! │  everything else is immutable.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use std::sync::Arc;
//! use loja_core::{Customer, DiscountPolicy, Money, OrderLine, Product};
//! use loja_orders::{render_text, OrderService};
//!
//! let service = OrderService::in_memory();
//! let maria = Arc::new(Customer::new(1, "Maria", "maria@gmail.com", "12344321").unwrap());
//! let hd = Arc::new(Product::new(3, "HD Externo", Money::from_major(500), "Eletronico").unwrap());
//!
//! let order = service
//!     .create_order(maria, vec![OrderLine::new(hd, 3).unwrap()], &DiscountPolicy::Quantity)
//!     .unwrap();
//! assert_eq!(order.total(), Money::from_major(1275));
//!
//! let text = render_text(&service.list_orders().unwrap());
//! assert!(text.contains("Total com desconto: R$ 1275.00"));
//! ```

pub mod activity;
pub mod error;
pub mod factory;
pub mod report;
pub mod repository;
pub mod service;

pub use activity::{ActivityLog, ConsoleLog, MemoryLog, TracingLog};
pub use error::{OrdersError, OrdersResult};
pub use factory::{OrderFactory, OrderIdSequence};
pub use report::{render_json, render_text, LineReport, OrderReport};
pub use repository::{InMemoryOrderRepository, OrderRepository};
pub use service::OrderService;
