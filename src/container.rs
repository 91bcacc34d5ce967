// container.rs

use std::{
    fmt,
    io::{Read, Write},
    iter::Flatten,
    path::Path,
    sync::Arc,
};

use indexmap::{map::Values, IndexMap};
use rayon::prelude::*;
use rustc_hash::FxBuildHasher;
use tracing::{debug, info};

use crate::{
    error::BedError,
    io::{InputStream, OutputStream},
    Interval,
};

/// Flat iterator over all entries, chromosome registry order outside and
/// bucket order inside.
pub type Iter<'a, T> = Flatten<Values<'a, String, Vec<Arc<T>>>>;

/// A chromosome-partitioned collection of intervals of one variant.
///
/// Entries live in per-chromosome buckets. The map's key order is the
/// chromosome registry: first-insertion order until [`sort`](Self::sort) is
/// called. A chromosome is registered exactly while its bucket is non-empty.
///
/// Entries are held behind `Arc` so that [`merge`](Self::merge) can share
/// them between containers without copying.
#[derive(Debug, Clone)]
pub struct BedContainer<T: Interval> {
    /// Per-chromosome buckets, keyed in registry order.
    buckets: IndexMap<String, Vec<Arc<T>>, FxBuildHasher>,
    /// Total entries across all buckets.
    n_entries: usize,
    /// Whether trailing columns are kept when parsing and written on output.
    keep_extras: bool,
    /// Advisory: set by `sort`, cleared by any insertion or removal.
    is_sorted: bool,
}

impl<T: Interval> Default for BedContainer<T> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<T: Interval> BedContainer<T> {
    pub fn new(keep_extras: bool) -> Self {
        Self {
            buckets: IndexMap::default(),
            n_entries: 0,
            keep_extras,
            is_sorted: false,
        }
    }

    pub fn keep_extras(&self) -> bool {
        self.keep_extras
    }

    pub fn is_sorted(&self) -> bool {
        self.is_sorted
    }

    pub fn len(&self) -> usize {
        self.n_entries
    }

    pub fn is_empty(&self) -> bool {
        self.n_entries == 0
    }

    pub fn n_chroms(&self) -> usize {
        self.buckets.len()
    }

    /// Registered chromosomes, in registry order.
    pub fn chroms(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets.keys().map(String::as_str)
    }

    pub fn entries_in(&self, chrom: &str) -> Result<&[Arc<T>], BedError> {
        self.buckets
            .get(chrom)
            .map(Vec::as_slice)
            .ok_or_else(|| BedError::UnknownChromosome(chrom.to_string()))
    }

    pub fn n_entries_in(&self, chrom: &str) -> Result<usize, BedError> {
        self.entries_in(chrom).map(<[_]>::len)
    }

    /// Drop all entries and reset the sorted flag.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.n_entries = 0;
        self.is_sorted = false;
    }

    /// Parse split text columns into a record and add it.
    pub fn add_fields(&mut self, fields: &[&str]) -> Result<(), BedError> {
        let entry = T::from_fields(fields, self.keep_extras)?;
        self.add(entry);
        Ok(())
    }

    pub fn add(&mut self, interval: T) {
        self.add_shared(Arc::new(interval));
    }

    /// Add an entry that may also be held by other containers.
    pub fn add_shared(&mut self, entry: Arc<T>) {
        match self.buckets.get_mut(entry.chrom()) {
            Some(bucket) => bucket.push(entry),
            None => {
                let chrom = entry.chrom().to_string();
                debug!(chrom = %chrom, "registering chromosome");
                self.buckets.insert(chrom, vec![entry]);
            }
        }
        self.n_entries += 1;
        self.is_sorted = false;
    }

    /// Remove the first entry equal to `interval` from its chromosome's
    /// bucket, unregistering the chromosome if the bucket empties.
    pub fn remove(&mut self, interval: &T) -> Result<Arc<T>, BedError> {
        let chrom = interval.chrom();
        let bucket = self
            .buckets
            .get_mut(chrom)
            .ok_or_else(|| BedError::UnknownChromosome(chrom.to_string()))?;
        let position = bucket
            .iter()
            .position(|entry| entry.as_ref() == interval)
            .ok_or_else(|| BedError::EntryNotFound(interval.to_string()))?;

        let removed = bucket.remove(position);
        if bucket.is_empty() {
            debug!(chrom = %chrom, "unregistering empty chromosome");
            self.buckets.shift_remove(chrom);
        }
        self.n_entries -= 1;
        self.is_sorted = false;
        Ok(removed)
    }

    /// The entry at flat position `index`.
    pub fn get(&self, index: usize) -> Result<&Arc<T>, BedError> {
        let mut total = 0;
        for bucket in self.buckets.values() {
            let n = bucket.len();
            total += n;
            if index < total {
                return Ok(&bucket[index - (total - n)]);
            }
        }
        Err(BedError::IndexOutOfBounds {
            index,
            len: self.n_entries,
        })
    }

    /// Like [`get`](Self::get), for signed positions from untrusted input.
    pub fn at(&self, index: i64) -> Result<&Arc<T>, BedError> {
        let index = usize::try_from(index).map_err(|_| BedError::NegativeIndex(index))?;
        self.get(index)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.buckets.values().flatten()
    }

    /// Order the chromosome registry by name and each bucket by start.
    pub fn sort(&mut self) {
        self.buckets.sort_keys();
        self.buckets
            .par_values_mut()
            .for_each(|bucket| bucket.sort_by_key(|entry| entry.start()));
        self.is_sorted = true;
        debug!(n_chroms = self.n_chroms(), n_entries = self.n_entries, "sorted");
    }

    /// All entries matching every filter that is set. Naming a chromosome
    /// that is not registered is an error rather than an empty result.
    pub fn query(&self, filter: &Filter<'_>) -> Result<Vec<&Arc<T>>, BedError> {
        match filter.chrom {
            Some(chrom) => Ok(self
                .entries_in(chrom)?
                .iter()
                .filter(|entry| filter.matches_position(entry.as_ref()))
                .collect()),
            None => Ok(self
                .iter()
                .filter(|entry| filter.matches_position(entry.as_ref()))
                .collect()),
        }
    }

    /// All entries overlapping `query` (closed ranges, see
    /// [`Interval::overlaps`]). A linear scan of the query's chromosome.
    pub fn find_overlapping(&self, query: &T, strand_aware: bool) -> Vec<&Arc<T>> {
        self.buckets
            .get(query.chrom())
            .map(|bucket| {
                bucket
                    .iter()
                    .filter(|entry| entry.overlaps(query, strand_aware))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// A new container holding the entries of `a` then `b`, shared rather
    /// than copied. It keeps extras if either input does.
    pub fn merge(a: &Self, b: &Self) -> Self {
        let mut merged = Self::new(a.keep_extras || b.keep_extras);
        for entry in a.iter().chain(b.iter()) {
            merged.add_shared(Arc::clone(entry));
        }
        merged
    }

    /// Read tab-separated records, one per line. Every record is validated
    /// before any is added, so a bad line leaves the container unchanged.
    pub fn read_from<R: Read>(&mut self, reader: R) -> Result<usize, BedError> {
        let mut tsv = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut parsed = Vec::new();
        let mut record = csv::StringRecord::new();
        while tsv.read_record(&mut record)? {
            let line = record
                .position()
                .map_or(parsed.len() as u64 + 1, |position| position.line());
            let fields: Vec<&str> = record.iter().collect();
            let entry = T::from_fields(&fields, self.keep_extras).map_err(|e| e.at_line(line))?;
            parsed.push(entry);
        }

        let n_records = parsed.len();
        for entry in parsed {
            self.add(entry);
        }
        self.is_sorted = false;
        info!(
            n_records,
            n_chroms = self.n_chroms(),
            "loaded records"
        );
        Ok(n_records)
    }

    /// Load records from a file, gzipped or plain.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, BedError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading");
        let reader = InputStream::new(path).reader()?;
        self.read_from(reader)
    }

    /// Write every entry as one line in flat order. Extras follow the fixed
    /// columns only when this container keeps extras.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), BedError> {
        for entry in self.iter() {
            self.write_entry(&mut writer, entry)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write one entry as a line, with its extras appended only when this
    /// container keeps extras.
    pub fn write_entry<W: Write>(&self, mut writer: W, entry: &T) -> Result<(), BedError> {
        if self.keep_extras && entry.has_extras() {
            writeln!(writer, "{}\t{}", entry, entry.extras().join("\t"))?;
        } else {
            writeln!(writer, "{}", entry)?;
        }
        Ok(())
    }

    /// Write to a file, gzipped if the path ends in `.gz`.
    pub fn dump(&self, path: impl AsRef<Path>) -> Result<(), BedError> {
        let path = path.as_ref();
        let writer = OutputStream::new(Some(path)).writer()?;
        self.write_to(writer)?;
        info!(path = %path.display(), n_records = self.n_entries, "wrote records");
        Ok(())
    }
}

impl<'a, T: Interval> IntoIterator for &'a BedContainer<T> {
    type Item = &'a Arc<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Interval> fmt::Display for BedContainer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of entries: {}", self.n_entries)?;
        writeln!(f, "Number of chromosomes: {}", self.n_chroms())?;
        writeln!(f, "Sorted: {}", self.is_sorted)?;
        write!(f, "Keep extra fields: {}", self.keep_extras)
    }
}

/// Exact-match filters for [`BedContainer::query`]. Unset filters match
/// everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Filter<'a> {
    chrom: Option<&'a str>,
    start: Option<u32>,
    end: Option<u32>,
}

impl<'a> Filter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chrom(mut self, chrom: &'a str) -> Self {
        self.chrom = Some(chrom);
        self
    }

    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: u32) -> Self {
        self.end = Some(end);
        self
    }

    fn matches_position<T: Interval>(&self, entry: &T) -> bool {
        self.start.map_or(true, |start| entry.start() == start)
            && self.end.map_or(true, |end| entry.end() == end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::TestDir;
    use crate::{Bed3, Bed6, Score, Strand};
    use proptest::prelude::*;

    fn bed3(chrom: &str, start: u32, end: u32) -> Bed3 {
        Bed3::new(chrom, start, end).unwrap()
    }

    fn make_test_container() -> BedContainer<Bed3> {
        let mut container = BedContainer::new(false);
        for (chrom, start, end) in [("chr1", 10, 20), ("chr1", 30, 40), ("chr2", 5, 15)] {
            container.add(bed3(chrom, start, end));
        }
        container
    }

    fn serialized(container: &BedContainer<impl Interval>) -> Vec<String> {
        container.iter().map(|entry| entry.to_string()).collect()
    }

    #[test]
    fn test_load_scenario() {
        let mut container = BedContainer::<Bed3>::new(false);
        let text = "chr1\t10\t20\nchr1\t30\t40\nchr2\t5\t15\n";
        assert_eq!(container.read_from(text.as_bytes()).unwrap(), 3);
        assert_eq!(container.len(), 3);
        assert_eq!(container.n_chroms(), 2);
        assert!(!container.is_sorted());

        container.sort();
        assert!(container.is_sorted());
        assert_eq!(container.get(0).unwrap().to_string(), "chr1\t10\t20");
    }

    #[test]
    fn test_add_fields() {
        let mut container = BedContainer::<Bed6>::new(true);
        container
            .add_fields(&["chr1", "1", "2", "NAME", ".", "+", "A", "B"])
            .unwrap();
        let entry = container.get(0).unwrap();
        assert_eq!(entry.score(), Score::Unknown);
        assert_eq!(entry.extras().len(), 2);

        // a failed add leaves everything as it was
        container.sort();
        assert!(container.add_fields(&["chr2", "1", "2", "x", "0", "?"]).is_err());
        assert!(container.add_fields(&["chr2", "5", "2", "x", "0", "+"]).is_err());
        assert_eq!(container.len(), 1);
        assert_eq!(container.n_chroms(), 1);
        assert!(container.is_sorted());
    }

    #[test]
    fn test_registry_follows_insertion_order() {
        let mut container = BedContainer::new(false);
        container.add(bed3("chrB", 1, 2));
        container.add(bed3("chrA", 1, 2));
        container.add(bed3("chrB", 3, 4));
        assert_eq!(container.chroms().collect::<Vec<_>>(), vec!["chrB", "chrA"]);
        assert_eq!(container.n_entries_in("chrB").unwrap(), 2);
        assert!(matches!(
            container.n_entries_in("chrC"),
            Err(BedError::UnknownChromosome(_))
        ));
        assert_eq!(
            serialized(&container),
            vec!["chrB\t1\t2", "chrB\t3\t4", "chrA\t1\t2"]
        );
    }

    #[test]
    fn test_remove() {
        let mut container = make_test_container();
        container.sort();

        container.remove(&bed3("chr1", 30, 40)).unwrap();
        assert_eq!(container.len(), 2);
        assert_eq!(container.n_chroms(), 2);
        assert!(!container.is_sorted());

        container.remove(&bed3("chr2", 5, 15)).unwrap();
        assert_eq!(container.len(), 1);
        assert_eq!(container.n_chroms(), 1);
        assert_eq!(container.chroms().collect::<Vec<_>>(), vec!["chr1"]);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut container = BedContainer::new(false);
        container.add(bed3("chr1", 10, 20));
        container.add(bed3("chr1", 10, 20));
        container.remove(&bed3("chr1", 10, 20)).unwrap();
        assert_eq!(container.len(), 1);
        assert_eq!(container.n_chroms(), 1);
    }

    #[test]
    fn test_remove_errors() {
        let mut container = make_test_container();
        assert!(matches!(
            container.remove(&bed3("chr3", 10, 20)),
            Err(BedError::UnknownChromosome(c)) if c == "chr3"
        ));
        assert!(matches!(
            container.remove(&bed3("chr1", 10, 21)),
            Err(BedError::EntryNotFound(_))
        ));
        assert_eq!(container.len(), 3);
    }

    #[test]
    fn test_flat_get() {
        let container = make_test_container();
        assert_eq!(container.get(1).unwrap().to_string(), "chr1\t30\t40");
        assert_eq!(container.get(2).unwrap().to_string(), "chr2\t5\t15");
        assert!(matches!(
            container.get(3),
            Err(BedError::IndexOutOfBounds { index: 3, len: 3 })
        ));
        assert!(matches!(container.at(-1), Err(BedError::NegativeIndex(-1))));
        assert_eq!(container.at(2).unwrap().to_string(), "chr2\t5\t15");
        assert!(BedContainer::<Bed3>::new(false).get(0).is_err());
    }

    #[test]
    fn test_iteration_reflects_mutation() {
        let mut container = make_test_container();
        assert_eq!(container.iter().count(), 3);
        container.add(bed3("chr3", 0, 1));
        assert_eq!((&container).into_iter().count(), 4);
        assert_eq!(
            container.iter().last().unwrap().to_string(),
            "chr3\t0\t1"
        );
    }

    #[test]
    fn test_sort() {
        let mut container = BedContainer::new(false);
        for (chrom, start) in [("chr2", 50), ("chr10", 5), ("chr2", 10), ("chr1", 7), ("chr1", 3)] {
            container.add(bed3(chrom, start, start + 1));
        }
        container.sort();
        assert_eq!(
            container.chroms().collect::<Vec<_>>(),
            vec!["chr1", "chr10", "chr2"]
        );
        let once = serialized(&container);
        assert_eq!(
            once,
            vec![
                "chr1\t3\t4",
                "chr1\t7\t8",
                "chr10\t5\t6",
                "chr2\t10\t11",
                "chr2\t50\t51"
            ]
        );
        container.sort();
        assert_eq!(serialized(&container), once);
    }

    #[test]
    fn test_query() {
        let container = make_test_container();
        assert_eq!(container.query(&Filter::new()).unwrap().len(), 3);
        assert_eq!(container.query(&Filter::new().chrom("chr1")).unwrap().len(), 2);
        let hits = container.query(&Filter::new().start(5)).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].chrom(), "chr2");
        assert!(container
            .query(&Filter::new().chrom("chr1").start(10).end(21))
            .unwrap()
            .is_empty());
        assert!(matches!(
            container.query(&Filter::new().chrom("chrM")),
            Err(BedError::UnknownChromosome(_))
        ));
    }

    #[test]
    fn test_find_overlapping() {
        let mut container = BedContainer::new(false);
        container.add(Bed6::new("chr1", 10, 20, "a", Score::Value(1), Strand::Forward).unwrap());
        container.add(Bed6::new("chr1", 15, 30, "b", Score::Value(1), Strand::Reverse).unwrap());
        container.add(Bed6::new("chr1", 40, 50, "c", Score::Value(1), Strand::Forward).unwrap());
        let query = Bed6::new("chr1", 18, 25, "q", Score::Unknown, Strand::Forward).unwrap();
        assert_eq!(container.find_overlapping(&query, false).len(), 2);
        let stranded = container.find_overlapping(&query, true);
        assert_eq!(stranded.len(), 1);
        assert_eq!(stranded[0].name(), "a");

        let elsewhere = Bed6::new("chr9", 18, 25, "q", Score::Unknown, Strand::Forward).unwrap();
        assert!(container.find_overlapping(&elsewhere, false).is_empty());
    }

    #[test]
    fn test_merge_shares_entries() {
        let a = make_test_container();
        let mut b = BedContainer::new(true);
        b.add(bed3("chr3", 1, 2));
        b.add(bed3("chr1", 100, 200));

        let merged = BedContainer::merge(&a, &b);
        assert_eq!(merged.len(), a.len() + b.len());
        assert!(merged.keep_extras());
        assert_eq!(merged.n_chroms(), 3);
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 2);

        // entries are shared, not copied
        assert!(Arc::ptr_eq(merged.get(0).unwrap(), a.get(0).unwrap()));
        assert!(Arc::ptr_eq(
            merged.entries_in("chr3").unwrap().first().unwrap(),
            b.get(0).unwrap()
        ));
        // b's chr1 entry lands in the existing chr1 bucket after a's
        assert_eq!(
            serialized(&merged),
            vec![
                "chr1\t10\t20",
                "chr1\t30\t40",
                "chr1\t100\t200",
                "chr2\t5\t15",
                "chr3\t1\t2"
            ]
        );

        let plain = BedContainer::merge(&a, &a);
        assert!(!plain.keep_extras());
    }

    #[test]
    fn test_clear() {
        let mut container = make_test_container();
        container.sort();
        container.clear();
        assert!(container.is_empty());
        assert_eq!(container.n_chroms(), 0);
        assert!(!container.is_sorted());
        assert_eq!(container.iter().count(), 0);
    }

    #[test]
    fn test_load_is_atomic() {
        let mut container = make_test_container();
        let text = "chr4\t1\t2\nchr4\t9\t3\n";
        let err = container.read_from(text.as_bytes()).unwrap_err();
        match err {
            BedError::Record { line, source } => {
                assert_eq!(line, 2);
                assert!(matches!(*source, BedError::InvalidInterval { start: 9, end: 3 }));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(container.len(), 3);
        assert_eq!(container.n_chroms(), 2);
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let mut container = BedContainer::<Bed3>::new(false);
        let text = "chr1\t1\t2\n\nchr1\t3\t4\n";
        assert_eq!(container.read_from(text.as_bytes()).unwrap(), 2);
    }

    #[test]
    fn test_write_extras() {
        let text = "chr1\t10\t20\tname\t0\t+\tA\tB\nchr1\t30\t40\tother\t.\t-\n";

        let mut keep = BedContainer::<Bed6>::new(true);
        keep.read_from(text.as_bytes()).unwrap();
        let mut out = Vec::new();
        keep.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), text);

        let mut dropped = BedContainer::<Bed6>::new(false);
        dropped.read_from(text.as_bytes()).unwrap();
        let mut out = Vec::new();
        dropped.write_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "chr1\t10\t20\tname\t0\t+\nchr1\t30\t40\tother\t.\t-\n"
        );
    }

    #[test]
    fn test_write_entry_follows_extras_flag() {
        let fields = ["chr1", "10", "20", "a", "b"];
        let mut keep = BedContainer::<Bed3>::new(true);
        keep.add_fields(&fields).unwrap();
        let entry = keep.get(0).unwrap();

        let mut out = Vec::new();
        keep.write_entry(&mut out, entry).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "chr1\t10\t20\ta\tb\n");

        // the same shared entry written by a container that drops extras
        let mut plain = BedContainer::<Bed3>::new(false);
        plain.add_shared(Arc::clone(entry));
        let mut out = Vec::new();
        plain.write_entry(&mut out, entry).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "chr1\t10\t20\n");
    }

    #[test]
    fn test_dump_and_load() {
        let test_dir = TestDir::new("dump_and_load").expect("Failed to create test dir");

        let mut container = make_test_container();
        container.add(bed3("chr1", 0, 5));
        container.sort();

        for name in ["regions.bed", "regions.bed.gz"] {
            let path = test_dir.path().join(name);
            container.dump(&path).expect("Failed to dump");

            let mut reloaded = BedContainer::<Bed3>::new(false);
            reloaded.load(&path).expect("Failed to load");
            assert_eq!(serialized(&reloaded), serialized(&container));
            assert!(!reloaded.is_sorted());
        }
    }

    #[test]
    fn test_load_missing_file() {
        let test_dir = TestDir::new("missing_file").expect("Failed to create test dir");
        let mut container = BedContainer::<Bed3>::new(false);
        assert!(matches!(
            container.load(test_dir.path().join("nope.bed")),
            Err(BedError::IOError(_))
        ));
    }

    #[test]
    fn test_display_summary() {
        let container = make_test_container();
        let summary = container.to_string();
        assert!(summary.contains("Number of entries: 3"));
        assert!(summary.contains("Number of chromosomes: 2"));
        assert!(summary.contains("Sorted: false"));
    }

    fn arb_records() -> impl Strategy<Value = Vec<(u8, u32, u32)>> {
        prop::collection::vec((0u8..5, 0u32..10_000, 1u32..500), 0..60)
    }

    fn build(records: &[(u8, u32, u32)]) -> BedContainer<Bed3> {
        let mut container = BedContainer::new(false);
        for &(chrom, start, width) in records {
            container.add(bed3(&format!("chr{chrom}"), start, start + width));
        }
        container
    }

    proptest! {
        #[test]
        fn prop_flat_get_matches_iteration(records in arb_records()) {
            let container = build(&records);
            prop_assert_eq!(container.len(), records.len());
            let chroms: std::collections::HashSet<_> = records.iter().map(|r| r.0).collect();
            prop_assert_eq!(container.n_chroms(), chroms.len());

            for (i, entry) in container.iter().enumerate() {
                prop_assert!(Arc::ptr_eq(container.get(i).unwrap(), entry));
            }
            prop_assert!(container.get(container.len()).is_err());
        }

        #[test]
        fn prop_sort_orders_and_is_idempotent(records in arb_records()) {
            let mut container = build(&records);
            container.sort();
            let entries: Vec<_> = container.iter().collect();
            for pair in entries.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!(a.chrom() <= b.chrom());
                if a.chrom() == b.chrom() {
                    prop_assert!(a.start() <= b.start());
                }
            }
            let once = serialized(&container);
            container.sort();
            prop_assert_eq!(serialized(&container), once);
        }

        #[test]
        fn prop_text_round_trip(records in arb_records()) {
            let container = build(&records);
            let mut out = Vec::new();
            container.write_to(&mut out).unwrap();
            let mut reloaded = BedContainer::<Bed3>::new(false);
            reloaded.read_from(out.as_slice()).unwrap();
            prop_assert_eq!(serialized(&reloaded), serialized(&container));
        }
    }
}
