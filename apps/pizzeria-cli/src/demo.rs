//! Sample orders printed by the `pizzeria` binary.

use std::sync::Arc;

use pizzeria_core::{CoreResult, FixedPricePizza, Order, Pizza, Topping};

/// A titled sample order.
pub struct DemoOrder {
    pub title: &'static str,
    pub order: Order,
}

/// Builds every sample order.
pub fn orders() -> CoreResult<Vec<DemoOrder>> {
    Ok(vec![
        DemoOrder {
            title: "Delivery order, priced by size",
            order: delivery_order()?,
        },
        DemoOrder {
            title: "Online order, menu pizzas",
            order: online_menu_order()?,
        },
        DemoOrder {
            title: "Walk-in party order",
            order: party_order()?,
        },
        DemoOrder {
            title: "Cheese pizza with extras",
            order: cheese_pizza_order()?,
        },
    ])
}

/// Three custom pizzas sharing toppings, with a $3.49 delivery charge.
fn delivery_order() -> CoreResult<Order> {
    let cheese = Arc::new(Topping::new("cheese", 0.06)?);
    let mushrooms = Arc::new(Topping::new("mushrooms", 0.1)?);
    let pepperoni = Arc::new(Topping::new("pepperoni", 0.18)?);
    let jalapeno = Arc::new(Topping::new("jalapeno", 0.14)?);
    let ham = Arc::new(Topping::new("ham", 0.08)?);

    let mut order = Order::new(3.49, false)?;
    order.add_item(Pizza::with_toppings(
        42,
        [cheese.clone(), mushrooms, pepperoni.clone()],
    )?);
    order.add_item(Pizza::with_toppings(28, [cheese.clone(), pepperoni, jalapeno])?);
    order.add_item(Pizza::with_toppings(32, [cheese, ham])?);
    Ok(order)
}

fn online_menu_order() -> CoreResult<Order> {
    let mut order = Order::new(0.0, true)?;
    order.add_item(FixedPricePizza::new("Margherita", 12.0)?);
    order.add_item(FixedPricePizza::new("Pepperoni", 15.0)?);
    order.add_item(FixedPricePizza::new("Margherita", 12.0)?);
    Ok(order)
}

fn party_order() -> CoreResult<Order> {
    let mut order = Order::new(0.0, false)?;
    for _ in 0..5 {
        order.add_item(FixedPricePizza::new("Margherita", 12.0)?);
    }
    Ok(order)
}

fn cheese_pizza_order() -> CoreResult<Order> {
    let mut pizza = FixedPricePizza::new("Cheese Pizza", 8.99)?;
    pizza.add_topping(Topping::new("Cheese", 1.20)?);
    pizza.add_topping(Topping::new("Pepperoni", 1.50)?);
    pizza.add_topping(Topping::new("Mushroom", 0.99)?);

    let mut order = Order::new(0.0, false)?;
    order.add_item(pizza);
    Ok(order)
}
