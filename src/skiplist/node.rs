//! Узлы пропускного списка и арена, в которой они живут.
//!
//! Узлы не ссылаются друг на друга указателями: каждая связь — это индекс
//! слота в [`NodeArena`]. Владеет узлами только арена, а `forward` и
//! `backward` используются исключительно для обхода.

use std::ops::{Index, IndexMut};

/// Стабильный индекс узла в арене.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Запись уровня: ссылка вперёд и число шагов уровня 0, которое она
/// перекрывает.
///
/// Если `forward` отсутствует, `span` равен числу узлов после владельца
/// записи до конца списка.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct LevelEntry {
    pub(crate) forward: Option<NodeId>,
    pub(crate) span: usize,
}

/// Узел с пользовательским значением.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) backward: Option<NodeId>,
    pub(crate) levels: Vec<LevelEntry>,
}

/// Головной узел без полезной нагрузки.
///
/// Массив уровней выделяется один раз на `max_level` записей и не меняет
/// размер за всё время жизни списка.
#[derive(Debug, Clone)]
pub(crate) struct Header {
    pub(crate) levels: Vec<LevelEntry>,
}

/// Позиция при спуске: голова или реальный узел.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    Head,
    Node(NodeId),
}

/// Хранилище узлов со списком свободных слотов.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
}

/// Ссылка только для чтения на узел списка.
///
/// Возвращается из поиска и позволяет двигаться по уровню 0 в обе стороны.
pub struct NodeRef<'a, T> {
    arena: &'a NodeArena<T>,
    id: NodeId,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl<T> Node<T> {
    /// Создаёт узел с `level` пустыми записями уровней.
    pub(crate) fn new(
        value: T,
        level: usize,
    ) -> Self {
        Self {
            value,
            backward: None,
            levels: vec![LevelEntry::default(); level],
        }
    }

    #[inline]
    pub(crate) fn level(&self) -> usize {
        self.levels.len()
    }
}

impl Header {
    pub(crate) fn new(max_level: usize) -> Self {
        Self {
            levels: vec![LevelEntry::default(); max_level],
        }
    }

    /// Сбрасывает все уровни в исходное состояние.
    pub(crate) fn reset(&mut self) {
        for entry in self.levels.iter_mut() {
            *entry = LevelEntry::default();
        }
    }
}

impl Position {
    /// Узел, если позиция не голова.
    #[inline]
    pub(crate) fn node(self) -> Option<NodeId> {
        match self {
            Position::Head => None,
            Position::Node(id) => Some(id),
        }
    }
}

impl<T> NodeArena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Размещает узел, переиспользуя освобождённый слот, если он есть.
    pub(crate) fn insert(
        &mut self,
        node: Node<T>,
    ) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Забирает узел из арены, освобождая его слот.
    pub(crate) fn remove(
        &mut self,
        id: NodeId,
    ) -> Node<T> {
        match self.slots[id.0].take() {
            Some(node) => {
                self.free.push(id);
                node
            }
            None => unreachable!("dangling node id {}", id.0),
        }
    }

    /// Общее число слотов, включая свободные.
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(
        arena: &'a NodeArena<T>,
        id: NodeId,
    ) -> Self {
        Self { arena, id }
    }

    #[inline]
    pub(crate) fn id(&self) -> NodeId {
        self.id
    }

    /// Значение узла.
    pub fn value(&self) -> &'a T {
        &self.arena[self.id].value
    }

    /// Число уровней, в которых участвует узел.
    pub fn level(&self) -> usize {
        self.arena[self.id].level()
    }

    /// Следующий узел на уровне 0.
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        self.arena[self.id].levels[0]
            .forward
            .map(|id| NodeRef::new(self.arena, id))
    }

    /// Предыдущий узел на уровне 0; `None` для первого узла.
    pub fn prev(&self) -> Option<NodeRef<'a, T>> {
        self.arena[self.id]
            .backward
            .map(|id| NodeRef::new(self.arena, id))
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов
////////////////////////////////////////////////////////////////////////////////

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = Node<T>;

    fn index(
        &self,
        id: NodeId,
    ) -> &Self::Output {
        match &self.slots[id.0] {
            Some(node) => node,
            None => unreachable!("dangling node id {}", id.0),
        }
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(
        &mut self,
        id: NodeId,
    ) -> &mut Self::Output {
        match &mut self.slots[id.0] {
            Some(node) => node,
            None => unreachable!("dangling node id {}", id.0),
        }
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for NodeRef<'_, T> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .field("level", &self.level())
            .finish()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
