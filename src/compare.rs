//! Трёхзначные компараторы, передаваемые в операции списка.
//!
//! Список не знает, как упорядочены его элементы: порядок задаётся
//! компаратором при каждом вызове. Любое замыкание
//! `Fn(&T, &T) -> Ordering` уже является компаратором.

use std::cmp::Ordering;

/// Полный порядок над `T`.
///
/// Для одного экземпляра списка во всех вызовах должен использоваться один и
/// тот же порядок; смешивание несовместимых компараторов не проверяется.
pub trait Comparator<T: ?Sized> {
    /// Сравнивает `a` с `b`.
    fn compare(
        &self,
        a: &T,
        b: &T,
    ) -> Ordering;

    /// `a` строго меньше `b`.
    #[inline]
    fn less(
        &self,
        a: &T,
        b: &T,
    ) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// `a` и `b` равны по этому порядку.
    #[inline]
    fn equal(
        &self,
        a: &T,
        b: &T,
    ) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

/// Естественный порядок `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

/// Обращённый порядок вложенного компаратора.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(
        &self,
        a: &T,
        b: &T,
    ) -> Ordering {
        self(a, b)
    }
}

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(
        &self,
        a: &T,
        b: &T,
    ) -> Ordering {
        a.cmp(b)
    }
}

impl<T, C> Comparator<T> for Reversed<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    #[inline]
    fn compare(
        &self,
        a: &T,
        b: &T,
    ) -> Ordering {
        self.0.compare(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_comparator() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());

        assert!(by_len.less(&"ab", &"abc"));
        assert!(by_len.equal(&"ab", &"cd"));
    }

    #[test]
    fn test_natural_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare("b", "a"), Ordering::Greater);
    }

    #[test]
    fn test_reversed() {
        let rev = Reversed(NaturalOrder);

        assert!(rev.less(&5, &3));
        assert!(rev.equal(&4, &4));
    }
}
