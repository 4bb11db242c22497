//! mathkit Toolkit Tour
//!
//! This example walks through each topic of the toolkit:
//! - Algebra: linear and quadratic equations
//! - Geometry: triangles, distances, vectors and circles
//! - Trigonometry: degree-based functions and triangle laws
//! - Calculus: derivatives and Riemann integrals
//! - Number theory: primes, factors, Fibonacci and factorials
//! - Statistics: a full sample summary
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use mathkit::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), MathError> {
    println!("{}", "=".repeat(80));
    println!("mathkit - Toolkit Tour");
    println!("{}", "=".repeat(80));
    println!();

    example_1_algebra()?;
    example_2_geometry()?;
    example_3_trigonometry()?;
    example_4_calculus()?;
    example_5_number_theory()?;
    example_6_statistics()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Algebra
fn example_1_algebra() -> Result<(), MathError> {
    println!("Example 1: Algebra");
    println!("{}", "-".repeat(80));

    // 2x - 4 = 0
    println!("2x - 4 = 0          -> {:?}", solve_linear(2.0, -4.0)); // Some(2.0)
    println!("0x + 1 = 0          -> {:?}", solve_linear(0.0, 1.0)); // None

    for (a, b, c) in [(1.0, -3.0, 2.0), (1.0, 2.0, 1.0), (1.0, 0.0, 1.0)] {
        let roots = solve_quadratic(a, b, c)?;
        println!(
            "{a}x² + {b}x + {c} = 0 -> {} root(s): {:?}",
            roots.len(),
            roots.roots()
        );
    }
    // 1x² + -3x + 2 = 0 -> 2 root(s): [1.0, 2.0]
    // 1x² + 2x + 1 = 0 -> 1 root(s): [-1.0]
    // 1x² + 0x + 1 = 0 -> 0 root(s): []

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Geometry
fn example_2_geometry() -> Result<(), MathError> {
    println!("Example 2: Geometry");
    println!("{}", "-".repeat(80));

    println!("Heron area (3, 4, 5):       {:.4}", heron_area(3.0, 4.0, 5.0)?); // 6.0000
    println!(
        "Hypotenuse of (3, 4):       {:.4}",
        missing_right_triangle_side(Some(3.0), Some(4.0), None)?
    ); // 5.0000
    println!(
        "Leg of (?, 12, 13):         {:.4}",
        missing_right_triangle_side(None, Some(12.0), Some(13.0))?
    ); // 5.0000
    println!(
        "Distance (0,0)-(6,8):       {:.4}",
        distance_2d(0.0, 0.0, 6.0, 8.0)
    ); // 10.0000
    println!(
        "Angle [1,0] vs [0,1]:       {:.4} rad",
        angle_between_vectors(&[1.0, 0.0], &[0.0, 1.0])?
    ); // 1.5708 rad

    let mut circle = Circle::new(2.0)?;
    println!(
        "Circle r=2: area {:.4}, circumference {:.4}",
        circle.area(),
        circle.circumference()
    ); // area 12.5664, circumference 12.5664
    circle.set_radius(0.5)?;
    println!("Circle r=0.5: diameter {:.4}", circle.diameter()); // 1.0000

    // Rejected input
    if let Err(e) = heron_area(1.0, 2.0, 10.0) {
        println!("Heron (1, 2, 10):           {e}");
    }

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Trigonometry
fn example_3_trigonometry() -> Result<(), MathError> {
    println!("Example 3: Trigonometry");
    println!("{}", "-".repeat(80));

    println!("sin(30°) = {:.4}", sin_deg(30.0)); // 0.5000
    println!("cos(60°) = {:.4}", cos_deg(60.0)); // 0.5000
    println!("tan(45°) = {:.4}", tan_deg(45.0)); // 1.0000
    println!("π rad    = {:.1}°", to_degrees(core::f64::consts::PI)); // 180.0°

    println!("Law of cosines (3, 4, 90°): {:.4}", law_of_cosines(3.0, 4.0, 90.0)?); // 5.0000
    match law_of_sines(5.0, 30.0, 90.0)? {
        Some(b) => println!("Law of sines (5, 30°, 90°): {b:.4}"), // 10.0000
        None => println!("Law of sines: undefined"),
    }
    if law_of_sines(5.0, 180.0, 90.0)?.is_none() {
        println!("Law of sines (5, 180°, 90°): undefined");
    }

    // Rejected input
    if let Err(e) = law_of_cosines(-3.0, 4.0, 90.0) {
        println!("Law of cosines (-3, 4, 90°): {e}");
    }

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Calculus
fn example_4_calculus() -> Result<(), MathError> {
    println!("Example 4: Calculus");
    println!("{}", "-".repeat(80));

    let f = |x: f64| x * x * x;
    println!("d/dx x³ at 2:          {:.6}", derivative(f, 2.0)?); // 12.000000
    println!("∫ x³ on [0, 2] (left): {:.6}", integral(f, 0.0, 2.0)?); // 3.999200

    for rule in [Left, Right, Midpoint, Trapezoid] {
        let integrator = Integral::new().subdivisions(1_000).rule(rule).build()?;
        println!(
            "  {:<10} {:.6}",
            rule.name(),
            integrator.integrate(f, 0.0, 2.0)?
        );
    }
    // Exact value is 4

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 5: Number Theory
fn example_5_number_theory() -> Result<(), MathError> {
    println!("Example 5: Number Theory");
    println!("{}", "-".repeat(80));

    let primes: Vec<i64> = (1..30).filter(|&n| is_prime(n)).collect();
    println!("Primes below 30:   {primes:?}");
    println!("Factors of 360:    {:?}", factor_integer(360)?); // [2, 2, 2, 3, 3, 5]
    println!("Factors of -84:    {:?}", factor_integer(-84)?); // [2, 2, 3, 7]
    println!("Is 144 a square:   {}", is_perfect_square(144)?); // true
    println!("Is 153 Armstrong:  {}", is_armstrong(153)); // true
    println!("F(10):             {}", nth_fibonacci(10)?); // 55
    println!("20!:               {}", factorial(20)?); // 2432902008176640000

    if let Err(e) = factorial(40) {
        println!("40!:               {e}");
    }

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 6: Statistics
fn example_6_statistics() -> Result<(), MathError> {
    println!("Example 6: Statistics");
    println!("{}", "-".repeat(80));

    let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    println!("Data: {data:?}");
    println!("{}", Summary::from_sample(&data)?);

    let tied = [1.0, 1.0, 2.0, 2.0, 3.0];
    println!("Modes of {tied:?}: {:?}", multimode(&tied)?); // [1.0, 2.0]
    if let Err(e) = mode(&tied) {
        println!("mode: {e}");
    }

    println!();
    Ok(())
}
