//! Macros for ergonomic pipeline construction.

/// Chain transducers in data-flow order.
///
/// `pipeline!(a, b, c)` is `a.then(b).then(c)`; `pipeline!()` is the
/// identity transducer.
///
/// # Example
///
/// ```
/// use transducers::pipeline;
/// use transducers::reducers::into_vec;
/// use transducers::transduce;
/// use transducers::xform::{drop, filter, map, take};
///
/// let xform = pipeline!(
///     drop(1),
///     filter(|x: &i32| x % 3 != 0),
///     map(|x: i32| x * 10),
///     take(3),
/// );
///
/// assert_eq!(transduce(xform, into_vec(), 0..), vec![10, 20, 40]);
/// ```
#[macro_export]
macro_rules! pipeline {
    () => {
        $crate::core::identity()
    };
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let p = $first;
        $(
            let p = $crate::core::Transducer::then(p, $rest);
        )*
        p
    }};
}
