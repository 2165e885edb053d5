use std::fmt::Debug;

use rand::{rngs::StdRng, Rng, SeedableRng};
use spanskip_error::debug_assert_invariant;
use tracing::{debug, trace};

use super::{
    node::{Header, LevelEntry, Node, NodeArena, NodeId, NodeRef, Position},
    Iter, LevelGenerator, ReverseIter, LEVEL_LIMIT,
};
use crate::{
    compare::{Comparator, NaturalOrder},
    config::SkipListConfig,
};

/// Пропускной список с рангами.
///
/// Каждая ссылка вперёд хранит `span` — число шагов уровня 0, которое она
/// перекрывает. Это даёт ранг узла за O(log n) и доступ по позиции.
///
/// Порядок задаётся компаратором при каждом вызове (`*_by`), для `T: Ord`
/// есть методы без компаратора. Равные значения не схлопываются: новый
/// элемент встаёт перед уже существующими равными.
pub struct SkipList<T, R = StdRng> {
    /// Головной узел; не содержит полезных данных.
    pub(crate) header: Header,
    pub(crate) arena: NodeArena<T>,
    /// Последний узел на уровне 0.
    pub(crate) tail: Option<NodeId>,
    /// Количество элементов (без головы).
    pub(crate) length: usize,
    /// Число активных уровней.
    pub(crate) level: usize,
    pub(crate) levels: LevelGenerator<R>,
}

/// Предшественники и ранги, собранные при спуске.
struct Path {
    update: [Position; LEVEL_LIMIT],
    rank: [usize; LEVEL_LIMIT],
}

////////////////////////////////////////////////////////////////////////////////
// Конструкторы
////////////////////////////////////////////////////////////////////////////////

impl<T> SkipList<T, StdRng> {
    /// Создаёт пустой список с параметрами по умолчанию и генератором,
    /// инициализированным из системной энтропии.
    pub fn new() -> Self {
        Self::with_config(SkipListConfig::default(), StdRng::from_entropy())
    }
}

impl<T, R: Rng> SkipList<T, R> {
    /// Создаёт пустой список с заданным генератором случайных чисел.
    pub fn with_rng(rng: R) -> Self {
        Self::with_config(SkipListConfig::default(), rng)
    }

    /// Создаёт пустой список с заданными параметрами.
    ///
    /// # Panics
    ///
    /// Паникует на некорректной конфигурации (см.
    /// [`SkipListConfig::validate`]).
    pub fn with_config(
        config: SkipListConfig,
        rng: R,
    ) -> Self {
        let levels = LevelGenerator::new(&config, rng);

        Self {
            header: Header::new(levels.max_level()),
            arena: NodeArena::new(),
            tail: None,
            length: 0,
            level: 1,
            levels,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Вставка
////////////////////////////////////////////////////////////////////////////////

impl<T, R: Rng> SkipList<T, R> {
    /// Вставляет значение в отсортированную позицию и возвращает его ранг
    /// (с единицы).
    ///
    /// Дубликаты допускаются: равное значение вставляется перед
    /// существующими равными.
    pub fn put_by<C>(
        &mut self,
        value: T,
        cmp: C,
    ) -> usize
    where
        C: Comparator<T>,
    {
        let Path {
            mut update,
            mut rank,
        } = self.find_path(&value, &cmp);

        let node_level = self.levels.random_level();
        debug_assert_invariant!(
            node_level <= self.max_level(),
            "node level {} above cap {}",
            node_level,
            self.max_level()
        );

        if node_level > self.level {
            for l in self.level..node_level {
                rank[l] = 0;
                update[l] = Position::Head;
                self.header.levels[l].span = self.length;
            }

            trace!(from = self.level, to = node_level, "skip list level grew");
            self.level = node_level;
        }

        let id = self.arena.insert(Node::new(value, node_level));

        for l in 0..node_level {
            let pred = *self.entry(update[l], l);
            let offset = rank[0] - rank[l];

            self.arena[id].levels[l] = LevelEntry {
                forward: pred.forward,
                span: pred.span - offset,
            };
            *self.entry_mut(update[l], l) = LevelEntry {
                forward: Some(id),
                span: offset + 1,
            };
        }

        // Рёбра выше нового узла перепрыгивают через него.
        for l in node_level..self.level {
            self.entry_mut(update[l], l).span += 1;
        }

        self.arena[id].backward = update[0].node();

        match self.arena[id].levels[0].forward {
            Some(next) => self.arena[next].backward = Some(id),
            None => self.tail = Some(id),
        }

        self.length += 1;

        rank[0] + 1
    }
}

impl<T: Ord, R: Rng> SkipList<T, R> {
    /// Вставляет значение в естественном порядке `Ord`.
    pub fn put(
        &mut self,
        value: T,
    ) -> usize {
        self.put_by(value, NaturalOrder)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Поиск и удаление
////////////////////////////////////////////////////////////////////////////////

impl<T, R> SkipList<T, R> {
    /// Возвращает первый узел, который не меньше `value`.
    ///
    /// Это не обязательно точное совпадение; для равенства используйте
    /// [`SkipList::search_by`].
    pub fn get_by<C>(
        &self,
        value: &T,
        cmp: C,
    ) -> Option<NodeRef<'_, T>>
    where
        C: Comparator<T>,
    {
        self.lower_bound(value, &cmp)
            .map(|id| NodeRef::new(&self.arena, id))
    }

    /// Ищет значение, равное `value`.
    pub fn search_by<C>(
        &self,
        value: &T,
        cmp: C,
    ) -> Option<&T>
    where
        C: Comparator<T>,
    {
        self.lower_bound(value, &cmp)
            .map(|id| &self.arena[id].value)
            .filter(|found| cmp.equal(*found, value))
    }

    /// Проверяет, содержится ли значение в списке.
    pub fn contains_by<C>(
        &self,
        value: &T,
        cmp: C,
    ) -> bool
    where
        C: Comparator<T>,
    {
        self.search_by(value, cmp).is_some()
    }

    /// Ранг (с единицы) первого узла, равного `value`.
    pub fn rank_by<C>(
        &self,
        value: &T,
        cmp: C,
    ) -> Option<usize>
    where
        C: Comparator<T>,
    {
        let mut current = Position::Head;
        let mut traversed = 0;

        for l in (0..self.level).rev() {
            while let Some(next) = self.entry(current, l).forward {
                if cmp.less(&self.arena[next].value, value) {
                    traversed += self.entry(current, l).span;
                    current = Position::Node(next);
                } else {
                    break;
                }
            }
        }

        let entry = self.entry(current, 0);
        let candidate = entry.forward?;

        if cmp.equal(&self.arena[candidate].value, value) {
            Some(traversed + entry.span)
        } else {
            None
        }
    }

    /// Узел с рангом `rank` (с единицы).
    pub fn get_by_rank(
        &self,
        rank: usize,
    ) -> Option<NodeRef<'_, T>> {
        if rank == 0 || rank > self.length {
            return None;
        }

        let mut current = Position::Head;
        let mut traversed = 0;

        for l in (0..self.level).rev() {
            while let Some(next) = self.entry(current, l).forward {
                let span = self.entry(current, l).span;
                if traversed + span <= rank {
                    traversed += span;
                    current = Position::Node(next);
                } else {
                    break;
                }
            }

            if traversed == rank {
                return current.node().map(|id| NodeRef::new(&self.arena, id));
            }
        }

        None
    }

    /// Итератор по узлам с рангами `start..=end` (с единицы).
    ///
    /// `end` за пределами списка обрезается по длине.
    pub fn range_by_rank(
        &self,
        start: usize,
        end: usize,
    ) -> Iter<'_, T> {
        let end = end.min(self.length);

        match self.get_by_rank(start) {
            Some(node) if start <= end => {
                Iter::new(&self.arena, Some(node.id()), end - start + 1)
            }
            _ => Iter::new(&self.arena, None, 0),
        }
    }

    /// Удаляет первый узел, равный `value`, и возвращает его значение.
    pub fn remove_by<C>(
        &mut self,
        value: &T,
        cmp: C,
    ) -> Option<T>
    where
        C: Comparator<T>,
    {
        let Path { update, .. } = self.find_path(value, &cmp);

        let candidate = self.entry(update[0], 0).forward?;
        if !cmp.equal(&self.arena[candidate].value, value) {
            return None;
        }

        for l in 0..self.level {
            let pred = update[l];

            if self.entry(pred, l).forward == Some(candidate) {
                let removed = self.arena[candidate].levels[l];
                let entry = self.entry_mut(pred, l);
                entry.span = entry.span + removed.span - 1;
                entry.forward = removed.forward;
            } else {
                self.entry_mut(pred, l).span -= 1;
            }
        }

        let backward = self.arena[candidate].backward;
        match self.arena[candidate].levels[0].forward {
            Some(next) => self.arena[next].backward = backward,
            None => self.tail = backward,
        }

        // Узел мог быть единственным сразу на нескольких верхних уровнях.
        while self.level > 1 && self.header.levels[self.level - 1].forward.is_none() {
            self.level -= 1;
            trace!(to = self.level, "skip list level shrank");
        }

        self.length -= 1;

        Some(self.arena.remove(candidate).value)
    }

    /// Удаляет все элементы из списка.
    pub fn clear(&mut self) {
        debug!(length = self.length, "clearing skip list");

        self.arena.clear();
        self.header.reset();
        self.tail = None;
        self.length = 0;
        self.level = 1;
    }

    /// Возвращает текущее число элементов в списке.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Проверяет на пустоту.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Число активных уровней.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Ёмкость массива уровней головы.
    pub fn max_level(&self) -> usize {
        self.header.levels.len()
    }

    /// Первый элемент (минимальный по порядку списка).
    pub fn first(&self) -> Option<&T> {
        self.header.levels[0].forward.map(|id| &self.arena[id].value)
    }

    /// Последний элемент (хвост).
    pub fn last(&self) -> Option<&T> {
        self.tail.map(|id| &self.arena[id].value)
    }

    /// Итератор по элементам в порядке уровня 0.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.header.levels[0].forward, self.length)
    }

    /// Итератор по элементам в обратном порядке (по backward-ссылкам).
    pub fn iter_rev(&self) -> ReverseIter<'_, T> {
        ReverseIter::new(&self.arena, self.tail, self.length)
    }

    /// Спуск сверху вниз до первого узла, не меньшего `value`.
    fn lower_bound<C>(
        &self,
        value: &T,
        cmp: &C,
    ) -> Option<NodeId>
    where
        C: Comparator<T>,
    {
        let mut current = Position::Head;

        for l in (0..self.level).rev() {
            while let Some(next) = self.entry(current, l).forward {
                if cmp.less(&self.arena[next].value, value) {
                    current = Position::Node(next);
                } else {
                    break;
                }
            }
        }

        self.entry(current, 0).forward
    }

    /// Спуск сверху вниз с записью предшественника и ранга на каждом уровне.
    fn find_path<C>(
        &self,
        value: &T,
        cmp: &C,
    ) -> Path
    where
        C: Comparator<T>,
    {
        let mut update = [Position::Head; LEVEL_LIMIT];
        let mut rank = [0usize; LEVEL_LIMIT];
        let mut current = Position::Head;

        for l in (0..self.level).rev() {
            rank[l] = if l + 1 == self.level { 0 } else { rank[l + 1] };

            while let Some(next) = self.entry(current, l).forward {
                if cmp.less(&self.arena[next].value, value) {
                    rank[l] += self.entry(current, l).span;
                    current = Position::Node(next);
                } else {
                    break;
                }
            }

            update[l] = current;
        }

        Path { update, rank }
    }

    #[inline]
    pub(crate) fn entry(
        &self,
        pos: Position,
        level: usize,
    ) -> &LevelEntry {
        match pos {
            Position::Head => &self.header.levels[level],
            Position::Node(id) => &self.arena[id].levels[level],
        }
    }

    #[inline]
    fn entry_mut(
        &mut self,
        pos: Position,
        level: usize,
    ) -> &mut LevelEntry {
        match pos {
            Position::Head => &mut self.header.levels[level],
            Position::Node(id) => &mut self.arena[id].levels[level],
        }
    }
}

impl<T: Ord, R> SkipList<T, R> {
    /// Первый узел, не меньший `value`.
    pub fn get(
        &self,
        value: &T,
    ) -> Option<NodeRef<'_, T>> {
        self.get_by(value, NaturalOrder)
    }

    /// Ищет значение, равное `value`.
    pub fn search(
        &self,
        value: &T,
    ) -> Option<&T> {
        self.search_by(value, NaturalOrder)
    }

    /// Проверяет, содержится ли значение в списке.
    pub fn contains(
        &self,
        value: &T,
    ) -> bool {
        self.contains_by(value, NaturalOrder)
    }

    /// Ранг (с единицы) первого вхождения `value`.
    pub fn rank(
        &self,
        value: &T,
    ) -> Option<usize> {
        self.rank_by(value, NaturalOrder)
    }

    /// Удаляет первое вхождение `value`.
    pub fn remove(
        &mut self,
        value: &T,
    ) -> Option<T> {
        self.remove_by(value, NaturalOrder)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для SkipList
////////////////////////////////////////////////////////////////////////////////

impl<T> Default for SkipList<T, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, R: Clone> Clone for SkipList<T, R> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            arena: self.arena.clone(),
            tail: self.tail,
            length: self.length,
            level: self.level,
            levels: self.levels.clone(),
        }
    }
}

impl<T: Debug, R> Debug for SkipList<T, R> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, R> PartialEq for SkipList<T, R> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<'a, T, R> IntoIterator for &'a SkipList<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord, R: Rng> Extend<T> for SkipList<T, R> {
    fn extend<I: IntoIterator<Item = T>>(
        &mut self,
        iter: I,
    ) {
        for value in iter {
            self.put(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SkipList<T, StdRng> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
